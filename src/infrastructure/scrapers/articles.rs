use super::Selectors;
use crate::domain::GameName;
use scraper::{ElementRef, Html};

/// Flattens the text of an element: each text node trimmed, joined by a
/// single space, inner whitespace runs collapsed.
///
/// Adjacent text nodes always end up as separate words, so
/// `<p>is</p><p>a</p>` counts as two words rather than gluing into "isa".
pub fn flatten_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collects absolute URLs of article links whose title mentions `game`,
/// in document order, keeping at most `limit`.
pub fn extract_article_links(
    document: &Html,
    selectors: &Selectors,
    base_url: &str,
    game: &GameName,
    limit: usize,
) -> Vec<String> {
    document
        .select(&selectors.link)
        .filter_map(|link| {
            let href = link.value().attr("href")?;
            let title = link.select(&selectors.title).next()?;
            game.matches_title(&flatten_text(title))
                .then(|| format!("{base_url}{href}"))
        })
        .take(limit)
        .collect()
}

/// Returns the text of the first content region, if the page has one.
pub fn extract_article_text(document: &Html, selectors: &Selectors) -> Option<String> {
    document
        .select(&selectors.content)
        .next()
        .map(flatten_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteProfile;
    use crate::domain::GameCatalog;

    fn selectors() -> Selectors {
        Selectors::new(&SiteProfile {
            index_url: "https://www.ign.com/news".to_string(),
            base_url: "https://www.ign.com".to_string(),
            article_prefix: "/articles/".to_string(),
            title_selector: "span.item-title".to_string(),
            content_selector: "section.article-page".to_string(),
        })
        .unwrap()
    }

    fn link(href: &str, title: &str) -> String {
        format!(r#"<a href="{href}"><div><span class="item-title">{title}</span></div></a>"#)
    }

    fn game(name: &str) -> GameName {
        GameCatalog::default().lookup(name).unwrap()
    }

    #[test]
    fn keeps_matching_links_in_document_order() {
        let html = format!(
            "<html><body>{}{}{}{}</body></html>",
            link("/articles/mk-world-review", "Mario Kart World Review"),
            link("/articles/zelda-news", "Zelda news roundup"),
            link("/videos/mario-kart-trailer", "Mario Kart trailer"),
            link("/articles/mk-tips", "mario kart tips"),
        );
        let document = Html::parse_document(&html);

        let links = extract_article_links(
            &document,
            &selectors(),
            "https://www.ign.com",
            &game("Mario Kart"),
            10,
        );

        assert_eq!(
            links,
            vec![
                "https://www.ign.com/articles/mk-world-review",
                "https://www.ign.com/articles/mk-tips",
            ]
        );
    }

    #[test]
    fn matches_ten_case_variants() {
        let variants = ["mario kart", "MARIO Kart", "Mario Kart", "mArIo KaRt"];
        let body: String = (0..10)
            .map(|i| {
                link(
                    &format!("/articles/story-{i}"),
                    &format!("{} story {i}", variants[i % variants.len()]),
                )
            })
            .collect();
        let document = Html::parse_document(&format!("<html><body>{body}</body></html>"));

        let links = extract_article_links(
            &document,
            &selectors(),
            "https://www.ign.com",
            &game("Mario Kart"),
            10,
        );

        assert_eq!(links.len(), 10);
        assert_eq!(links[0], "https://www.ign.com/articles/story-0");
        assert_eq!(links[9], "https://www.ign.com/articles/story-9");
    }

    #[test]
    fn truncates_to_limit() {
        let body: String = (0..5)
            .map(|i| link(&format!("/articles/cod-{i}"), "Call of Duty update"))
            .collect();
        let document = Html::parse_document(&format!("<html><body>{body}</body></html>"));

        let links = extract_article_links(
            &document,
            &selectors(),
            "https://www.ign.com",
            &game("Call of Duty"),
            3,
        );

        assert_eq!(links.len(), 3);
        assert_eq!(links[2], "https://www.ign.com/articles/cod-2");
    }

    #[test]
    fn links_without_title_are_ignored() {
        let html = r#"<html><body>
            <a href="/articles/gta-6">Grand Theft Auto VI</a>
        </body></html>"#;
        let document = Html::parse_document(html);

        let links = extract_article_links(
            &document,
            &selectors(),
            "https://www.ign.com",
            &game("Grand Theft Auto"),
            10,
        );

        assert!(links.is_empty());
    }

    #[test]
    fn extracts_first_content_region() {
        let html = r#"<html><body>
            <header>Navigation</header>
            <section class="article-page">
                <p>Hogwarts   Legacy is</p>
                <p>a <b>great</b> game.</p>
            </section>
            <section class="article-page"><p>Second region</p></section>
        </body></html>"#;
        let document = Html::parse_document(html);

        assert_eq!(
            extract_article_text(&document, &selectors()).as_deref(),
            Some("Hogwarts Legacy is a great game.")
        );
    }

    #[test]
    fn adjacent_elements_stay_separate_words() {
        let document = Html::parse_document(
            r#"<html><body><section class="article-page"><p>is</p><p>a</p></section></body></html>"#,
        );

        let text = extract_article_text(&document, &selectors()).unwrap();

        assert_eq!(text, "is a");
        assert_eq!(text.split_whitespace().count(), 2);
    }

    #[test]
    fn missing_content_region_yields_none() {
        let document = Html::parse_document("<html><body><p>Paywall</p></body></html>");

        assert_eq!(extract_article_text(&document, &selectors()), None);
    }
}
