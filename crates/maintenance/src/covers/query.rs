//! Title and URL string handling for cover lookups.

use reqwest::Url;

use catalog::cover_storage::CoverFormat;
use catalog::models::Book;

/// Longest title prefix, in characters, kept in a cover filename.
const FILENAME_TITLE_CHARS: usize = 30;

/// Query-string form of a title: colons removed, words percent-encoded and
/// joined with `+`.
pub fn search_terms(title: &str) -> String {
    title
        .replace(':', "")
        .split_whitespace()
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

/// Titles to try against a metadata API, most specific first.
///
/// The full title is always tried. A title of more than two words is then
/// narrowed to its first two words; a two-word query cannot narrow further.
pub fn title_candidates(title: &str) -> Vec<String> {
    let title = title.trim();
    if title.is_empty() {
        return Vec::new();
    }

    let words: Vec<&str> = title.split_whitespace().collect();
    let mut candidates = vec![title.to_string()];
    if words.len() > 2 {
        candidates.push(words[..2].join(" "));
    }
    candidates
}

/// Requests the larger rendition of a volume thumbnail by rewriting
/// `zoom=1` to `zoom=2`. Other URLs are returned unchanged.
pub fn upgrade_thumbnail_zoom(thumbnail: &str) -> String {
    let Ok(mut url) = Url::parse(thumbnail) else {
        return thumbnail.replace("zoom=1", "zoom=2");
    };

    if !url.query_pairs().any(|(k, v)| k == "zoom" && v == "1") {
        return thumbnail.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "zoom" && v == "1" {
                "2".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    url.query_pairs_mut().clear().extend_pairs(pairs);
    url.to_string()
}

/// Cleans a cover URL before download. Amazon image hosts reject a literal
/// `+` in the path, so it is sent percent-encoded.
pub fn prepare_download_url(url: &str) -> String {
    let url = url.trim();
    if url.contains("amazon.com") {
        url.replace('+', "%2B")
    } else {
        url.to_string()
    }
}

/// Filename for a backfilled cover: `<id>_<title>` with spaces turned into
/// underscores, cut to 30 characters, and reduced to characters the storage
/// layer accepts.
pub fn cover_filename(book: &Book, format: CoverFormat) -> String {
    let title: String = book
        .title
        .replace(' ', "_")
        .chars()
        .take(FILENAME_TITLE_CHARS)
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();

    format!("{}_{}.{}", book.id, title, format.extension())
}

/// Filename for a cover attached while seeding.
pub fn seed_cover_filename(isbn: &str) -> String {
    format!("{isbn}_cover.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{OffsetDateTime, macros::date};
    use uuid::Uuid;

    fn book(title: &str) -> Book {
        Book {
            id: Uuid::nil(),
            title: title.to_string(),
            isbn: "0".to_string(),
            publication_date: date!(1866 - 01 - 01),
            description: String::new(),
            page_count: 0,
            language: String::new(),
            publisher: String::new(),
            category_id: None,
            total_copies: 0,
            available_copies: 0,
            cover_image: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_search_terms() {
        assert_eq!(search_terms("Crime and Punishment"), "Crime+and+Punishment");
        assert_eq!(search_terms("Dune: Messiah"), "Dune+Messiah");
        assert_eq!(search_terms("Suç ve Ceza"), "Su%C3%A7+ve+Ceza");
        assert_eq!(search_terms("Catch-22 & more"), "Catch-22+%26+more");
    }

    #[test]
    fn test_title_candidates_narrow_long_titles() {
        assert_eq!(
            title_candidates("The Count of Monte Cristo"),
            vec!["The Count of Monte Cristo", "The Count"]
        );
        assert_eq!(title_candidates("Anna Karenina"), vec!["Anna Karenina"]);
        assert_eq!(title_candidates("Dracula"), vec!["Dracula"]);
        assert!(title_candidates("   ").is_empty());
    }

    #[test]
    fn test_title_candidates_collapse_whitespace() {
        assert_eq!(
            title_candidates("  Crime  and   Punishment "),
            vec!["Crime  and   Punishment", "Crime and"]
        );
    }

    #[test]
    fn test_upgrade_thumbnail_zoom() {
        let thumb = "http://books.google.com/books/content?id=abc&printsec=frontcover&img=1&zoom=1&source=gbs_api";
        assert_eq!(
            upgrade_thumbnail_zoom(thumb),
            "http://books.google.com/books/content?id=abc&printsec=frontcover&img=1&zoom=2&source=gbs_api"
        );
    }

    #[test]
    fn test_upgrade_thumbnail_zoom_leaves_other_urls() {
        let url = "https://covers.example.com/b/id/1-L.jpg";
        assert_eq!(upgrade_thumbnail_zoom(url), url);
        let zoomed = "http://books.google.com/books/content?id=abc&zoom=3";
        assert_eq!(upgrade_thumbnail_zoom(zoomed), zoomed);
    }

    #[test]
    fn test_prepare_download_url() {
        assert_eq!(
            prepare_download_url(" https://images-na.ssl-images-amazon.com/images/I/71+WUXzpBFL.jpg "),
            "https://images-na.ssl-images-amazon.com/images/I/71%2BWUXzpBFL.jpg"
        );
        assert_eq!(
            prepare_download_url("https://example.com/a+b.jpg"),
            "https://example.com/a+b.jpg"
        );
    }

    #[test]
    fn test_cover_filename_truncates_and_normalizes() {
        let name = cover_filename(&book("The Hitchhiker's Guide to the Galaxy"), CoverFormat::Jpeg);
        assert_eq!(
            name,
            "00000000-0000-0000-0000-000000000000_The_Hitchhikers_Guide_to_the_.jpg"
        );

        let name = cover_filename(&book("Suç ve Ceza"), CoverFormat::Png);
        assert_eq!(name, "00000000-0000-0000-0000-000000000000_Suç_ve_Ceza.png");
    }

    #[test]
    fn test_seed_cover_filename() {
        assert_eq!(seed_cover_filename("9789750719387"), "9789750719387_cover.jpg");
    }
}
