use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::widgets::TableState;

use crate::engine::projection;
use crate::engine::selection::Selection;
use crate::model::film::{Column, Film};

/// Which control receives keys. Tab cycles through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Year,
    Country,
    Table,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Search => Focus::Year,
            Focus::Year => Focus::Country,
            Focus::Country => Focus::Table,
            Focus::Table => Focus::Search,
        }
    }

    pub fn previous(self) -> Focus {
        match self {
            Focus::Search => Focus::Table,
            Focus::Year => Focus::Search,
            Focus::Country => Focus::Year,
            Focus::Table => Focus::Country,
        }
    }
}

pub struct App {
    films: Vec<Film>,
    pub selection: Selection,
    // Filter options, built once from the full record set. Filtering
    // never narrows these lists.
    years: Vec<u32>,
    countries: Vec<String>,
    year_index: usize,
    country_index: usize,
    pub focus: Focus,
    pub table_state: TableState,
    pub should_quit: bool,
}

impl App {
    pub fn new(films: Vec<Film>) -> Self {
        let years = projection::distinct_years(&films);
        let countries = projection::distinct_countries(&films);

        App {
            films,
            selection: Selection::default(),
            years,
            countries,
            year_index: 0,
            country_index: 0,
            focus: Focus::Search,
            table_state: TableState::default(),
            should_quit: false,
        }
    }

    /// The rows currently on screen, recomputed from the record set and
    /// the selection on every call.
    pub fn rows(&self) -> Vec<&Film> {
        projection::project(&self.films, &self.selection)
    }

    pub fn film_count(&self) -> usize {
        self.films.len()
    }

    pub fn year_label(&self) -> String {
        match self.year_index {
            0 => "Any".to_string(),
            index => self.years[index - 1].to_string(),
        }
    }

    pub fn country_label(&self) -> String {
        match self.country_index {
            0 => "Any".to_string(),
            index => self.countries[index - 1].clone(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => match key.code {
                KeyCode::Char(c) => {
                    self.selection.search.push(c);
                    self.reset_view();
                }
                KeyCode::Backspace => {
                    self.selection.search.pop();
                    self.reset_view();
                }
                _ => {}
            },
            Focus::Year => match key.code {
                KeyCode::Left | KeyCode::Up => self.cycle_year(-1),
                KeyCode::Right | KeyCode::Down => self.cycle_year(1),
                other => self.handle_common_key(other),
            },
            Focus::Country => match key.code {
                KeyCode::Left | KeyCode::Up => self.cycle_country(-1),
                KeyCode::Right | KeyCode::Down => self.cycle_country(1),
                other => self.handle_common_key(other),
            },
            Focus::Table => match key.code {
                KeyCode::Up => self.move_row(-1),
                KeyCode::Down => self.move_row(1),
                other => self.handle_common_key(other),
            },
        }
    }

    /// Keys shared by every control except the search box, which needs
    /// its digits and letters for typing.
    fn handle_common_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.selection.toggle_sort(Column::ALL[index]);
                self.reset_view();
            }
            _ => {}
        }
    }

    fn cycle_year(&mut self, step: isize) {
        let option_count = (self.years.len() + 1) as isize;
        self.year_index = (self.year_index as isize + step).rem_euclid(option_count) as usize;
        self.selection.year = match self.year_index {
            0 => None,
            index => Some(self.years[index - 1]),
        };
        self.reset_view();
    }

    fn cycle_country(&mut self, step: isize) {
        let option_count = (self.countries.len() + 1) as isize;
        self.country_index = (self.country_index as isize + step).rem_euclid(option_count) as usize;
        self.selection.country = match self.country_index {
            0 => None,
            index => Some(self.countries[index - 1].clone()),
        };
        self.reset_view();
    }

    fn move_row(&mut self, step: isize) {
        let row_count = self.rows().len();
        if row_count == 0 {
            self.table_state.select(None);
            return;
        }

        let next = match self.table_state.selected() {
            None => 0,
            Some(current) => {
                (current as isize + step).clamp(0, row_count as isize - 1) as usize
            }
        };
        self.table_state.select(Some(next));
    }

    fn reset_view(&mut self) {
        self.table_state = TableState::default();
    }
}
