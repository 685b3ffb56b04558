//! Related-app scoring for the app detail page.
//!
//! A candidate earns one point for a matching use case and one point per
//! shared technology and industry slug. Zero-score candidates are dropped;
//! the rest are ordered by score with input order breaking ties.

use std::collections::HashSet;

use crate::types::{app::GalleryApp, tag::Tag};

/// A candidate paired with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredApp<'a> {
    pub app: &'a GalleryApp,
    pub score: u32,
}

fn slugs(tags: &[Tag]) -> HashSet<&str> {
    tags.iter().map(|t| t.slug.as_str()).collect()
}

fn shared(a: &[Tag], b: &[Tag]) -> u32 {
    slugs(a).intersection(&slugs(b)).count() as u32
}

/// Similarity between `target` and `candidate`.
///
/// A missing use case on either side contributes nothing.
pub fn relevance_score(target: &GalleryApp, candidate: &GalleryApp) -> u32 {
    let use_case = match (&target.use_case, &candidate.use_case) {
        (Some(t), Some(c)) if t.slug == c.slug => 1,
        _ => 0,
    };

    use_case
        + shared(&target.technologies, &candidate.technologies)
        + shared(&target.industries, &candidate.industries)
}

/// Score every candidate except the target, best first.
pub fn score_candidates<'a>(
    target: &GalleryApp,
    candidates: &'a [GalleryApp],
) -> Vec<ScoredApp<'a>> {
    let mut scored: Vec<ScoredApp<'a>> = candidates
        .iter()
        .filter(|c| c.id != target.id)
        .map(|app| ScoredApp {
            app,
            score: relevance_score(target, app),
        })
        .filter(|s| s.score > 0)
        .collect();

    // `sort_by` is stable: equal scores keep the candidates' input order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Up to `limit` apps most related to `target`.
pub fn rank_related<'a>(
    target: &GalleryApp,
    candidates: &'a [GalleryApp],
    limit: usize,
) -> Vec<&'a GalleryApp> {
    score_candidates(target, candidates)
        .into_iter()
        .take(limit)
        .map(|s| s.app)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tag(name: &str) -> Tag {
        Tag::named(name)
    }

    fn target() -> GalleryApp {
        GalleryApp::new("t", "target", "Target")
            .with_use_case(tag("Dashboard"))
            .with_technologies([tag("Streamlit"), tag("FastAPI")])
            .with_industries([tag("Retail")])
    }

    fn candidate_a() -> GalleryApp {
        GalleryApp::new("a", "a", "A")
            .with_use_case(tag("Dashboard"))
            .with_technologies([tag("Streamlit")])
    }

    fn candidate_b() -> GalleryApp {
        GalleryApp::new("b", "b", "B")
            .with_use_case(tag("ETL"))
            .with_technologies([tag("FastAPI"), tag("Dash")])
            .with_industries([tag("Retail")])
    }

    fn candidate_c() -> GalleryApp {
        GalleryApp::new("c", "c", "C")
            .with_use_case(tag("Chatbot"))
            .with_technologies([tag("Gradio")])
    }

    #[test]
    fn test_worked_example_scores() {
        let t = target();
        assert_eq!(relevance_score(&t, &candidate_a()), 2);
        assert_eq!(relevance_score(&t, &candidate_b()), 2);
        assert_eq!(relevance_score(&t, &candidate_c()), 0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let t = target();

        let ab = vec![candidate_a(), candidate_b(), candidate_c()];
        let ranked: Vec<&str> = rank_related(&t, &ab, 3)
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ranked, vec!["a", "b"]);

        let ba = vec![candidate_c(), candidate_b(), candidate_a()];
        let ranked: Vec<&str> = rank_related(&t, &ba, 3)
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ranked, vec!["b", "a"]);
    }

    #[test]
    fn test_higher_score_first() {
        let t = target();
        let best = GalleryApp::new("best", "best", "Best")
            .with_use_case(tag("Dashboard"))
            .with_technologies([tag("Streamlit"), tag("FastAPI")])
            .with_industries([tag("Retail")]);
        let pool = vec![candidate_a(), best, candidate_b()];

        let scored = score_candidates(&t, &pool);
        assert_eq!(scored[0].app.id, "best");
        assert_eq!(scored[0].score, 4);
    }

    #[test]
    fn test_target_is_excluded() {
        let t = target();
        let pool = vec![t.clone(), candidate_a()];
        let ranked = rank_related(&t, &pool, 3);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "a");
    }

    #[test]
    fn test_limit_truncates() {
        let t = target();
        let pool: Vec<GalleryApp> = (0..6)
            .map(|i| {
                GalleryApp::new(format!("x{}", i), format!("x{}", i), "X")
                    .with_use_case(tag("Dashboard"))
            })
            .collect();
        let ranked = rank_related(&t, &pool, 3);
        let ids: Vec<&str> = ranked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["x0", "x1", "x2"]);
    }

    #[test]
    fn test_untagged_target_has_no_related_apps() {
        let bare = GalleryApp::new("t", "t", "Bare");
        let pool = vec![candidate_a(), candidate_b(), GalleryApp::new("u", "u", "Also bare")];
        assert!(rank_related(&bare, &pool, 3).is_empty());
    }

    #[test]
    fn test_duplicate_tags_count_once() {
        let t = target();
        let dup =
            GalleryApp::new("d", "d", "D").with_technologies([tag("FastAPI"), tag("FastAPI")]);
        assert_eq!(relevance_score(&t, &dup), 1);
    }

    const TAGS: [&str; 5] = ["Dashboard", "ETL", "Streamlit", "FastAPI", "Retail"];

    fn arb_app() -> impl Strategy<Value = GalleryApp> {
        (
            "[a-d]{1,2}",
            proptest::option::of(proptest::sample::select(TAGS.to_vec())),
            proptest::sample::subsequence(TAGS.to_vec(), 0..=3),
            proptest::sample::subsequence(TAGS.to_vec(), 0..=2),
        )
            .prop_map(|(id, use_case, techs, industries)| {
                let mut app = GalleryApp::new(id.clone(), id, "App")
                    .with_technologies(techs.into_iter().map(Tag::named))
                    .with_industries(industries.into_iter().map(Tag::named));
                app.use_case = use_case.map(Tag::named);
                app
            })
    }

    proptest! {
        #[test]
        fn prop_ranking_invariants(
            target in arb_app(),
            pool in proptest::collection::vec(arb_app(), 0..10),
            limit in 0usize..5,
        ) {
            let ranked = rank_related(&target, &pool, limit);

            prop_assert!(ranked.len() <= limit);
            prop_assert!(ranked.iter().all(|a| a.id != target.id));

            let scores: Vec<u32> = ranked.iter().map(|a| relevance_score(&target, a)).collect();
            prop_assert!(scores.iter().all(|s| *s > 0));
            prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
