//! Terminal rendering of the browse screen.

use crate::core::browse::{BrowseController, Mode};
use crate::core::pager::{page_buttons, PageButton};
use crate::models::movie::{Genre, Movie};
use crate::models::session::Language;
use crate::services::tmdb::poster_url;
use crate::utils::i18n;
use colored::Colorize;

const LINE_WIDTH: usize = 80;

/// Print a line, right-aligned for right-to-left languages.
fn print_line(language: Language, text: &str) {
    if language.is_rtl() {
        println!("{:>width$}", text, width = LINE_WIDTH);
    } else {
        println!("{}", text);
    }
}

/// Truncate a title to fit a table column.
pub fn fit(title: &str, max: usize) -> String {
    if title.chars().count() > max {
        format!("{}...", title.chars().take(max.saturating_sub(3)).collect::<String>())
    } else {
        title.to_string()
    }
}

/// Screen title and active mode.
pub fn print_header(controller: &BrowseController, language: Language) {
    let title = format!("🎬 {}", i18n::translate(language, "popularMovies"));
    print_line(language, &title.bold().cyan().to_string());

    let mode = match controller.mode() {
        Mode::Popular => "All".to_string(),
        Mode::Genre(id) => match controller.selected_genre_name() {
            Some(name) => format!("Genre: {} ({})", name, id),
            None => format!("Genre: {}", id),
        },
        Mode::Search(query) => format!("Search: \"{}\"", query),
    };
    print_line(language, &mode.dimmed().to_string());
    println!();
}

/// Genre chips with the selection highlighted.
pub fn print_genres(genres: &[Genre], selected: Option<u64>) {
    if genres.is_empty() {
        return;
    }

    let mut chips = Vec::with_capacity(genres.len() + 1);
    chips.push(chip("All", None, selected.is_none()));
    for genre in genres {
        chips.push(chip(&genre.name, Some(genre.id), selected == Some(genre.id)));
    }

    println!("{} {}", "Genres:".bold(), chips.join(" "));
    println!();
}

fn chip(name: &str, id: Option<u64>, active: bool) -> String {
    let label = match id {
        Some(id) => format!("{}({})", name, id),
        None => name.to_string(),
    };
    if active {
        format!("[{}]", label).green().bold().to_string()
    } else {
        label
    }
}

/// Preview carousel line with the highlighted movie.
pub fn print_preview(items: &[Movie], index: usize) {
    let Some(current) = items.get(index) else {
        return;
    };

    let rating = current
        .rating_label()
        .map(|r| format!(" ⭐ {}", r))
        .unwrap_or_default();
    println!(
        "{} {}{}  {}",
        "▶".yellow(),
        fit(&current.title, 50).bold(),
        rating,
        format!("({}/{})", index + 1, items.len()).dimmed()
    );
    println!();
}

/// Movie grid as a table.
pub fn print_grid(controller: &BrowseController, language: Language) {
    let state = controller.state();
    if state.is_loading || state.is_refreshing {
        print_line(language, i18n::translate(language, "loading"));
        return;
    }

    let movies = controller.movies();
    if movies.is_empty() {
        let empty = i18n::translate_or(language, "noMoviesFound", "No movies found");
        print_line(language, &empty.yellow().to_string());
        return;
    }

    println!(
        " {:>4} | {:>4} | {:<44} | {:>4} | {:>8}",
        "#", "Year", "Title", "⭐", "ID"
    );
    println!("{}", "-".repeat(LINE_WIDTH));

    for (i, movie) in movies.iter().enumerate() {
        println!(
            " {:>4} | {:>4} | {:<44} | {:>4} | {:>8}",
            i + 1,
            movie.year().map(|y| y.to_string()).unwrap_or_default(),
            fit(&movie.title, 44),
            movie.rating_label().unwrap_or_default(),
            movie.id
        );
    }
    println!();
}

/// Prev, page window and Next.
pub fn print_pagination(controller: &BrowseController, radius: u32) {
    let state = controller.state();
    let row: Vec<String> = page_buttons(state.current_page, state.total_pages, radius)
        .into_iter()
        .map(|button| match button {
            PageButton::Prev => "‹ Prev".to_string(),
            PageButton::Next => "Next ›".to_string(),
            PageButton::Page { number, active: true } => {
                format!("[{}]", number).cyan().bold().to_string()
            }
            PageButton::Page { number, .. } => number.to_string(),
        })
        .collect();

    println!(
        "{}   {}",
        row.join("  "),
        format!("page {} of {}", state.current_page, state.total_pages).dimmed()
    );
}

/// Details card for one movie.
pub fn print_details(movie: &Movie, image_base_url: &str) {
    println!();
    println!("{}", movie.title.bold());
    if let Some(ref date) = movie.release_date {
        if !date.is_empty() {
            println!("  📅 {}", date);
        }
    }
    if let Some(vote) = movie.vote_average.filter(|v| *v > 0.0) {
        println!("  ⭐ {}/10", vote);
    }
    match movie.poster_path.as_deref() {
        Some(path) => println!("  {}", poster_url(image_base_url, path).dimmed()),
        None => println!("  {}", "No Image".dimmed()),
    }
    if let Some(ref overview) = movie.overview {
        println!();
        println!("{}", overview);
    }
    println!();
}

/// The whole browse screen.
pub fn print_screen(
    controller: &BrowseController,
    preview_index: usize,
    language: Language,
    radius: u32,
) {
    print_header(controller, language);
    print_preview(controller.preview(), preview_index);
    print_genres(controller.genres(), controller.selected_genre());
    print_grid(controller, language);
    print_pagination(controller, radius);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        assert_eq!(fit("Heat", 10), "Heat");
        assert_eq!(fit("The Lord of the Rings", 10), "The Lor...");
        assert_eq!(fit("千与千寻千与千寻", 5), "千与...");
    }
}
