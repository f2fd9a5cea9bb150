use select::{
    document::Document,
    node::Node,
    predicate::{And, Class, Name, Or},
};

use crate::clients::wiki_client::WikiClient;

/// A film as it appears in the list table: the title plus the article
/// link the details are fetched from. Rows without a link keep a None
/// url and end up as title-only records.
#[derive(Debug)]
pub struct PreliminaryFilmInformation {
    pub title: String,
    pub article_url: Option<String>,
}

/// Fields pulled from a film article's infobox. Any of them may be
/// missing; absent rows simply leave the field as None.
#[derive(Debug, Default, PartialEq)]
pub struct FilmDetails {
    pub director: Option<String>,
    pub release_year: Option<u32>,
    pub country: Option<String>,
    pub box_office: Option<String>,
}

#[derive(Debug)]
pub struct FilmExtractor {}

impl FilmExtractor {
    /// Walks the first wikitable on the list page and returns one
    /// preliminary record per data row, in page order.
    pub fn get_preliminary_info_for_film_list(
        list_page_html: &str,
    ) -> Vec<PreliminaryFilmInformation> {
        let document = Document::from(list_page_html);

        let table = match document.find(And(Name("table"), Class("wikitable"))).next() {
            Some(table) => table,
            None => return vec![],
        };

        let mut rows = table.find(Name("tr"));
        let title_index = match rows.next().and_then(Self::find_title_column) {
            Some(index) => index,
            None => return vec![],
        };

        rows.filter_map(|row| Self::extract_preliminary_info_from_row(row, title_index))
            .collect()
    }

    fn find_title_column(header_row: Node) -> Option<usize> {
        header_row
            .find(Or(Name("th"), Name("td")))
            .position(|cell| cell.text().to_lowercase().contains("title"))
    }

    fn extract_preliminary_info_from_row(
        row: Node,
        title_index: usize,
    ) -> Option<PreliminaryFilmInformation> {
        let title_cell = row.find(Or(Name("th"), Name("td"))).nth(title_index)?;

        // Titles sit inside <i><a>; fall back to the bare italic or
        // anchor, then to the cell text itself.
        let (raw_title, href) = match title_cell.find(Name("i")).next() {
            Some(italic) => match italic.find(Name("a")).next() {
                Some(anchor) => (anchor.text(), anchor.attr("href").map(str::to_string)),
                None => (italic.text(), None),
            },
            None => match title_cell.find(Name("a")).next() {
                Some(anchor) => (anchor.text(), anchor.attr("href").map(str::to_string)),
                None => (title_cell.text(), None),
            },
        };

        let title = Self::clean_text(&raw_title);
        if title.is_empty() {
            return None;
        }

        Some(PreliminaryFilmInformation {
            title,
            article_url: href.map(|href| Self::absolute_article_url(&href)),
        })
    }

    fn absolute_article_url(href: &str) -> String {
        if href.starts_with("http") {
            return href.to_string();
        }
        WikiClient::get_base_url() + href
    }

    /// Reads the article's infobox row by row. Rows are matched on their
    /// header text; anything unrecognized is skipped.
    pub fn extract_film_details_from_html(article_html: &str) -> FilmDetails {
        let document = Document::from(article_html);

        let infobox = document
            .find(Name("table"))
            .filter(|table| {
                table
                    .attr("class")
                    .map(|class| class.contains("infobox"))
                    .unwrap_or(false)
            })
            .next();

        let infobox = match infobox {
            Some(infobox) => infobox,
            None => return FilmDetails::default(),
        };

        let mut details = FilmDetails::default();
        for row in infobox.find(Name("tr")) {
            let header = match row.find(Name("th")).next() {
                Some(header) => header,
                None => continue,
            };
            let cell = match row.find(Name("td")).next() {
                Some(cell) => cell,
                None => continue,
            };

            let header_text = Self::clean_text(&header.text()).to_lowercase();
            if header_text.contains("directed by") {
                details.director = Self::extract_first_name(cell);
            } else if header_text.contains("release date") {
                details.release_year = Self::extract_release_year(cell);
            } else if matches!(
                header_text.as_str(),
                "country" | "countries" | "country of origin"
            ) {
                details.country = Self::extract_first_name(cell);
            } else if header_text.contains("box office") {
                details.box_office = Self::extract_box_office(cell);
            }
        }

        details
    }

    /// First credited value only: infobox cells list collaborators, but
    /// the table shows a single director and a single country.
    fn extract_first_name(cell: Node) -> Option<String> {
        let raw = match cell.find(Name("a")).next() {
            Some(anchor) => anchor.text(),
            None => Self::first_nonempty_text(cell)?,
        };

        let name = Self::fix_glued_names(&Self::clean_text(&raw));
        if name.is_empty() {
            return None;
        }
        Some(name)
    }

    fn first_nonempty_text(cell: Node) -> Option<String> {
        for child in cell.children() {
            if let Some(name) = child.name() {
                if name == "style" || name == "script" || name == "sup" {
                    continue;
                }
            }
            let text = child.text();
            if !text.trim().is_empty() {
                return Some(text);
            }
        }

        let text = cell.text();
        if text.trim().is_empty() {
            return None;
        }
        Some(text)
    }

    fn extract_release_year(cell: Node) -> Option<u32> {
        let text = Self::clean_text(&cell.text());
        let first_segment = text.split([';', '\n']).next().unwrap_or("");
        Self::first_four_digit_year(first_segment)
    }

    fn first_four_digit_year(text: &str) -> Option<u32> {
        let mut digits = String::new();
        for character in text.chars().chain(std::iter::once(' ')) {
            if character.is_ascii_digit() {
                digits.push(character);
                continue;
            }
            if digits.len() == 4 {
                if let Ok(year) = digits.parse::<u32>() {
                    if (1800..=2099).contains(&year) {
                        return Some(year);
                    }
                }
            }
            digits.clear();
        }
        None
    }

    /// Keeps the amount together with its billion/million unit word;
    /// they usually sit in separate text nodes in the cell.
    fn extract_box_office(cell: Node) -> Option<String> {
        let combined = Self::clean_text(&cell.text().replace('\u{a0}', " "));

        if let Some((amount, end)) = Self::first_dollar_amount(&combined) {
            let after = combined[end..].to_lowercase();
            let unit = if after.contains("billion") {
                " billion"
            } else if after.contains("million") {
                " million"
            } else {
                ""
            };
            return Some(format!("{}{}", amount, unit));
        }

        let fallback = combined
            .split(['|', '\n'])
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
        if fallback.is_empty() {
            return None;
        }
        Some(fallback)
    }

    fn first_dollar_amount(text: &str) -> Option<(String, usize)> {
        for (index, _) in text.match_indices('$') {
            let digits: String = text[index + 1..]
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
                .collect();
            if !digits.is_empty() {
                let amount = format!("${}", digits);
                let end = index + amount.len();
                return Some((amount, end));
            }
        }
        None
    }

    /// Drops citation markers like "[2]" and collapses whitespace.
    fn clean_text(text: &str) -> String {
        let without_citations = Self::strip_citation_markers(text);
        without_citations
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn strip_citation_markers(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(character) = chars.next() {
            if character == '[' {
                let mut lookahead = chars.clone();
                let mut saw_digit = false;
                while let Some(digit) = lookahead.peek() {
                    if digit.is_ascii_digit() {
                        saw_digit = true;
                        lookahead.next();
                    } else {
                        break;
                    }
                }
                if saw_digit && lookahead.peek() == Some(&']') {
                    lookahead.next();
                    chars = lookahead;
                    continue;
                }
            }
            out.push(character);
        }
        out
    }

    /// Inserts a space between a lowercase and an uppercase letter, which
    /// separates names the markup glued together ("James CameronJon").
    fn fix_glued_names(text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 4);
        let mut previous: Option<char> = None;
        for character in text.chars() {
            if let Some(previous) = previous {
                if previous.is_lowercase() && character.is_uppercase() {
                    out.push(' ');
                }
            }
            out.push(character);
            previous = Some(character);
        }
        out
    }
}
