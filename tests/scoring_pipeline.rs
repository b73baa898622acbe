use hook_ranker::scoring::{
    resolve_variable, CandidateScorer, FixedJitter, RankingPipeline, ScoredCandidate, ScorerConfig,
    SeededJitter,
};
use hook_ranker::{Candidate, ContentSignals, Tone};

fn template(text: &str, category: &str) -> Candidate {
    Candidate::template("t", "Test", "", text, category)
}

fn signals_with_topics(topics: &[&str]) -> ContentSignals {
    ContentSignals {
        main_topics: topics.iter().map(|topic| topic.to_string()).collect(),
        ..ContentSignals::default()
    }
}

fn id_scores(ranked: &[ScoredCandidate]) -> Vec<(String, f64)> {
    ranked
        .iter()
        .map(|scored| (scored.id().to_string(), scored.score))
        .collect()
}

fn score(candidate: &Candidate, signals: &ContentSignals) -> f64 {
    let scorer = CandidateScorer::default();
    scorer
        .score(candidate, signals, "", &mut FixedJitter(0.0))
        .score
}

#[test]
fn template_without_matches_scores_zero() {
    let scorer = CandidateScorer::default();
    let scored = scorer.score(
        &template("Just a plain line.", "Curation"),
        &ContentSignals::default(),
        "",
        &mut FixedJitter(0.0),
    );

    assert!((scored.rule_score - 0.0).abs() < 1e-6);
    assert_eq!(scored.reason, "General content match");
}

#[test]
fn phrase_groups_add_their_weights() {
    let scorer = CandidateScorer::default();
    let scored = scorer.score(
        &template("How to fix the biggest mistake", "Curation"),
        &ContentSignals::default(),
        "",
        &mut FixedJitter(0.0),
    );

    assert!((scored.rule_score - 55.0).abs() < 1e-6);
    assert_eq!(
        scored.reason,
        "Strong hook pattern: \"How to\", Problem/solution dynamic"
    );
}

#[test]
fn each_phrase_group_counts_once() {
    let candidate = template("The secret nobody tells you is hidden", "Curation");
    let total = score(&candidate, &ContentSignals::default());
    assert!((total - 75.0).abs() < 1e-6);
}

#[test]
fn numbered_list_placeholder_adds_bonus() {
    let candidate = template("[X] lessons from a decade", "Curation");
    assert!((score(&candidate, &ContentSignals::default()) - 25.0).abs() < 1e-6);
}

#[test]
fn alignment_and_topic_overlap_stack() {
    let candidate = template("A short note about business.", "Personal Story");
    let mut signals = signals_with_topics(&["business"]);
    signals.has_personal_story = true;

    assert!((score(&candidate, &signals) - 23.0).abs() < 1e-6);
}

#[test]
fn topic_overlap_checks_summary() {
    let candidate = Candidate::template(
        "t",
        "Test",
        "Share what you learned about business.",
        "A short note.",
        "Curation",
    );
    let signals = signals_with_topics(&["business"]);
    assert!((score(&candidate, &signals) - 8.0).abs() < 1e-6);
}

#[test]
fn contrarian_template_needs_controversial_tone() {
    let candidate = template("Share a contrarian view.", "Curation");
    let mut signals = ContentSignals::default();
    assert!((score(&candidate, &signals) - 0.0).abs() < 1e-6);

    signals.tone = Tone::Controversial;
    assert!((score(&candidate, &signals) - 25.0).abs() < 1e-6);
}

#[test]
fn adding_a_signal_never_lowers_the_score() {
    let candidate = template("The most useful habit I built.", "Personal Story");
    let plain = ContentSignals::default();
    let mut richer = plain.clone();
    richer.has_personal_story = true;
    richer.has_statistics = true;

    assert!(score(&candidate, &richer) >= score(&candidate, &plain));
}

#[test]
fn power_hook_scores_base_type_and_variables() {
    let candidate = Candidate::power_hook(
        "ph-test",
        "Nobody admits this about [topic].",
        "Controversial",
        "confrontational",
        &["topic"],
    );
    let scorer = CandidateScorer::default();
    let scored = scorer.score(
        &candidate,
        &signals_with_topics(&["business"]),
        "",
        &mut FixedJitter(0.0),
    );

    assert!((scored.rule_score - 165.0).abs() < 1e-6);
    assert_eq!(
        scored.filled_text.as_deref(),
        Some("Nobody admits this about business.")
    );
    assert_eq!(
        scored.variable_data.get("topic").map(String::as_str),
        Some("business")
    );
    assert!(scored
        .reason
        .starts_with("Category base: Controversial, Psychological type: confrontational, Variable filled: topic"));
    assert!(scored.reason.ends_with("Leverages authority/social proof"));
}

#[test]
fn power_hook_falls_back_without_bonus() {
    let candidate = Candidate::power_hook(
        "ph-test",
        "Nobody admits this about [topic].",
        "Controversial",
        "confrontational",
        &["topic"],
    );
    let scorer = CandidateScorer::default();
    let scored = scorer.score(&candidate, &ContentSignals::default(), "", &mut FixedJitter(0.0));

    assert!((scored.rule_score - 150.0).abs() < 1e-6);
    assert_eq!(
        scored.filled_text.as_deref(),
        Some("Nobody admits this about this.")
    );
}

#[test]
fn authority_phrase_matches_inside_placeholder() {
    // Phrases are plain substrings of the raw text, so "[topic]" carries "top".
    let candidate = template("Everything about [topic] here", "Curation");
    let scorer = CandidateScorer::default();
    let scored = scorer.score(&candidate, &ContentSignals::default(), "", &mut FixedJitter(0.0));

    assert!((scored.rule_score - 30.0).abs() < 1e-6);
    assert_eq!(scored.reason, "Leverages authority/social proof");

    let plain = template("Everything about it here", "Curation");
    assert!((score(&plain, &ContentSignals::default()) - 0.0).abs() < 1e-6);
}

#[test]
fn adding_an_opener_never_lowers_the_score() {
    let signals = ContentSignals::default();
    let base = template("a quiet line about habits", "Curation");
    let with_opener = template("Here are a quiet line about habits", "Curation");

    let before = score(&base, &signals);
    let after = score(&with_opener, &signals);
    assert!(after >= before);
    assert!((after - before - 40.0).abs() < 1e-6);
}

#[test]
fn second_opener_is_not_counted_twice() {
    let signals = ContentSignals::default();
    let one = template("Here are a quiet line about habits", "Curation");
    let two = template("Here are a quiet line. Most people miss habits", "Curation");

    let single = score(&one, &signals);
    let double = score(&two, &signals);
    assert!(double >= single);
    assert!((double - single).abs() < 1e-6);
    assert!((double - 40.0).abs() < 1e-6);
}

#[test]
fn unknown_category_and_type_use_defaults() {
    let candidate = Candidate::power_hook("ph-test", "A calm line.", "Other", "mystery", &[]);
    assert!((score(&candidate, &ContentSignals::default()) - 60.0).abs() < 1e-6);
}

#[test]
fn controversial_tone_boosts_contrarian_power_hooks() {
    let candidate = Candidate::power_hook("ph-test", "A calm line.", "Myth Busting", "contrarian", &[]);
    let mut signals = ContentSignals::default();
    let calm = score(&candidate, &signals);
    signals.tone = Tone::Controversial;
    let heated = score(&candidate, &signals);

    assert!((calm - 110.0).abs() < 1e-6);
    assert!((heated - 140.0).abs() < 1e-6);
}

#[test]
fn jitter_is_scaled_per_kind() {
    let scorer = CandidateScorer::new(ScorerConfig::default());
    let signals = ContentSignals::default();

    let scored_template = scorer.score(
        &template("How to start", "Curation"),
        &signals,
        "",
        &mut FixedJitter(0.5),
    );
    let hook = scorer.score(
        &Candidate::power_hook("ph-test", "A calm line.", "Insight", "revealing", &[]),
        &signals,
        "",
        &mut FixedJitter(0.5),
    );

    assert!((scored_template.jitter - 1.5).abs() < 1e-6);
    assert!((scored_template.score - 41.5).abs() < 1e-6);
    assert!((hook.jitter - 2.5).abs() < 1e-6);
    assert!((hook.score - 77.5).abs() < 1e-6);
}

#[test]
fn variables_resolve_from_raw_text() {
    let signals = ContentSignals::default();
    let text = "After 6 months in fintech I grew to 40% margins";

    let number = resolve_variable("number", &signals, text);
    assert_eq!(number.value, "6");
    assert!((number.bonus - 10.0).abs() < 1e-6);

    let time = resolve_variable("time period", &signals, text);
    assert_eq!(time.value, "6 months");

    let industry = resolve_variable("industry/field", &signals, text);
    assert_eq!(industry.value, "fintech");
    assert!((industry.bonus - 20.0).abs() < 1e-6);

    let unknown = resolve_variable("mystery", &signals, text);
    assert_eq!(unknown.value, "this");
    assert!(!unknown.is_from_content());
}

#[test]
fn pipeline_drops_candidates_without_rule_matches() {
    let pipeline = RankingPipeline::default();
    let candidates = vec![
        template("Just a plain line.", "Curation"),
        Candidate::template("t2", "Hook", "", "How to start", "Curation"),
    ];

    let ranked = pipeline.rank(
        &candidates,
        &ContentSignals::default(),
        "",
        5,
        &mut FixedJitter(0.0),
    );

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].id(), "t2");
}

#[test]
fn seeded_jitter_is_reproducible() {
    let pipeline = RankingPipeline::default();
    let candidates = vec![
        Candidate::power_hook("ph-a", "A calm line.", "Insight", "revealing", &[]),
        Candidate::power_hook("ph-b", "Another calm line.", "Insight", "revealing", &[]),
        Candidate::power_hook("ph-c", "One more calm line.", "Warning", "urgent", &[]),
    ];
    let signals = ContentSignals::default();

    let first = pipeline.rank(&candidates, &signals, "", 3, &mut SeededJitter::new(7));
    let second = pipeline.rank(&candidates, &signals, "", 3, &mut SeededJitter::new(7));

    assert_eq!(id_scores(&first), id_scores(&second));
}

#[test]
fn template_placeholders_are_prefilled_from_content() {
    let scorer = CandidateScorer::default();
    let scored = scorer.score(
        &template("How [Name] shipped [X] products", "Curation"),
        &ContentSignals::default(),
        "Notes on how Steve Jobs shipped 4 products",
        &mut FixedJitter(0.0),
    );

    assert_eq!(
        scored.filled_text.as_deref(),
        Some("How Steve Jobs shipped 4 products")
    );
    assert!((scored.rule_score - 25.0).abs() < 1e-6);
}
