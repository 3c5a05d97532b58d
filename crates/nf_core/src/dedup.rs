use crate::title::{normalize_title, TitleMatcher};
use crate::types::Article;

/// Merges near-duplicate headlines in a time-ordered article list.
///
/// Each incoming title is compared against the titles already kept, in the
/// order they were recorded, and only the first similar one counts. When the
/// kept article has no image and the incoming one does, the incoming article
/// takes its slot.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    matcher: TitleMatcher,
}

impl Deduplicator {
    pub fn new(matcher: TitleMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &TitleMatcher {
        &self.matcher
    }

    pub fn dedupe(&self, articles: Vec<Article>) -> Vec<Article> {
        let mut unique: Vec<Article> = Vec::with_capacity(articles.len());
        let mut seen = SeenTitles::default();

        for article in articles {
            let normalized = normalize_title(&article.title);

            let matched = seen
                .iter()
                .find(|existing| self.matcher.is_similar(existing, &normalized))
                .map(str::to_owned);

            let Some(matched) = matched else {
                seen.insert(normalized);
                unique.push(article);
                continue;
            };

            let Some(index) = unique
                .iter()
                .position(|kept| normalize_title(&kept.title) == matched)
            else {
                continue;
            };

            let replace = article.has_image() && !unique[index].has_image();
            tracing::debug!(
                "Merging '{}' into '{}' (image replacement: {})",
                article.title,
                unique[index].title,
                replace
            );
            if replace {
                unique[index] = article;
                seen.remove(&matched);
                seen.insert(normalized);
            }
        }

        unique
    }
}

/// [`Deduplicator::dedupe`] with the default matcher.
pub fn dedupe_articles(articles: Vec<Article>) -> Vec<Article> {
    Deduplicator::default().dedupe(articles)
}

/// Insertion-ordered set of normalized titles.
#[derive(Debug, Default)]
struct SeenTitles(Vec<String>);

impl SeenTitles {
    fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn insert(&mut self, title: String) {
        if !self.0.contains(&title) {
            self.0.push(title);
        }
    }

    fn remove(&mut self, title: &str) {
        self.0.retain(|seen| seen != title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn article(title: &str, minutes_ago: i64, image: Option<&str>) -> Article {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut article = Article::new(title, now - Duration::minutes(minutes_ago))
            .with_url(format!("https://news.ng/{}", minutes_ago));
        article.featured_image_url = image.map(str::to_string);
        article
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe_articles(vec![]).is_empty());
    }

    #[test]
    fn test_image_variant_replaces_in_place() {
        let articles = vec![
            article("Lagos Traffic Update on Third Mainland Bridge", 0, None),
            article("Ikeja mall unveils rooftop cinema", 5, None),
            article("Traffic Update: Third Mainland Bridge Congestion", 10, Some("http://x/a.jpg")),
        ];

        let result = dedupe_articles(articles);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Traffic Update: Third Mainland Bridge Congestion");
        assert_eq!(result[0].featured_image_url.as_deref(), Some("http://x/a.jpg"));
        assert_eq!(result[1].title, "Ikeja mall unveils rooftop cinema");
    }

    #[test]
    fn test_first_seen_kept_when_it_has_image() {
        let articles = vec![
            article("Lagos Traffic Update on Third Mainland Bridge", 0, Some("http://x/first.jpg")),
            article("Traffic Update: Third Mainland Bridge Congestion", 10, Some("http://x/a.jpg")),
        ];

        let result = dedupe_articles(articles);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].featured_image_url.as_deref(), Some("http://x/first.jpg"));
    }

    #[test]
    fn test_duplicate_without_image_is_dropped() {
        let articles = vec![
            article("Lagos Traffic Update on Third Mainland Bridge", 0, None),
            article("Traffic Update: Third Mainland Bridge Congestion", 10, None),
        ];

        let result = dedupe_articles(articles);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Lagos Traffic Update on Third Mainland Bridge");
    }

    #[test]
    fn test_only_first_match_is_considered() {
        let first = "nightlife guide lekki phase";
        let second = "lagos rooftop lounges guide";
        // Similar to both kept titles; it is merged into the first one only.
        let third = "nightlife guide lekki phase lagos rooftop lounges";

        let dedup = Deduplicator::default();
        assert!(!dedup.matcher().is_similar(first, second));
        assert!(dedup.matcher().is_similar(first, third));
        assert!(dedup.matcher().is_similar(second, third));

        let result = dedup.dedupe(vec![
            article(first, 0, None),
            article(second, 1, None),
            article(third, 2, Some("http://img/3.jpg")),
        ]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, third);
        assert_eq!(result[1].title, second);
    }

    #[test]
    fn test_swapped_title_moves_to_end_of_scan_order() {
        // After "b" replaces "a", the kept titles are scanned as [c, b].
        let a = "lekki concert tonight eko hotel";
        let b = "lekki concert tonight eko hotel suites";
        let c = "victoria island food festival";
        let d = "victoria island food festival lekki concert tonight hotel suites";

        let result = dedupe_articles(vec![
            article(a, 0, None),
            article(c, 1, None),
            article(b, 2, Some("http://img/b.jpg")),
            article(d, 3, Some("http://img/d.jpg")),
        ]);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, b);
        assert_eq!(result[1].title, d);
    }

    #[test]
    fn test_custom_threshold() {
        let strict = Deduplicator::new(TitleMatcher::new(0.9, 3));
        let articles = vec![
            article("Lagos Traffic Update on Third Mainland Bridge", 0, None),
            article("Traffic Update: Third Mainland Bridge Congestion", 10, None),
        ];
        assert_eq!(strict.dedupe(articles).len(), 2);
    }
}
