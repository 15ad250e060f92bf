//! Integration scenarios for the Naive Bayes classifier.

use std::sync::Arc;

use textbayes::analysis::analyzer::pipeline::PipelineAnalyzer;
use textbayes::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use textbayes::prelude::*;

fn spam_classifier() -> Result<NaiveBayesClassifier<String>> {
    let mut classifier = NaiveBayesClassifier::default();
    classifier.train("cheap loans now", "spam".to_string())?;
    classifier.train("meeting agenda attached", "ham".to_string())?;
    classifier.train("free cheap offer", "spam".to_string())?;
    Ok(classifier)
}

#[test]
fn test_spam_scenario() -> Result<()> {
    let classifier = spam_classifier()?;

    assert_eq!(classifier.classify("cheap offer now")?, "spam");

    let scores = classifier.scores("cheap offer now")?;
    assert_eq!(scores[0].label, "spam");
    assert!(scores[0].score > scores[1].score);
    Ok(())
}

#[test]
fn test_untrained_model_fails_with_no_training_data() {
    let classifier: NaiveBayesClassifier<String> = NaiveBayesClassifier::default();

    match classifier.classify("cheap offer now") {
        Err(TextBayesError::NoTrainingData(_)) => {}
        other => panic!("expected NoTrainingData, got {other:?}"),
    }
}

#[test]
fn test_blank_document_registers_viable_class() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::default();
    classifier.train(" ", "x")?;

    let model = classifier.model();
    assert_eq!(model.document_count(&"x"), 1);
    assert_eq!(model.distinct_word_count(&"x"), 0);
    assert!(model.class_probability(&"x").unwrap() > 0.0);

    classifier.train("cheap loans", "spam")?;
    let model = classifier.model();
    assert_eq!(model.document_count(&"x"), 1);
    assert!(model.class_probability(&"x").unwrap() > 0.0);
    assert_eq!(classifier.scores("agenda")?.len(), 2);
    Ok(())
}

#[test]
fn test_training_twice_doubles_counts() -> Result<()> {
    let mut once = NaiveBayesClassifier::default();
    once.train("free cheap cheap offer", "spam")?;

    let mut twice = NaiveBayesClassifier::default();
    twice.train("free cheap cheap offer", "spam")?;
    twice.train("free cheap cheap offer", "spam")?;

    for token in ["free", "cheap", "offer"] {
        assert_eq!(
            twice.model().word_count(&"spam", token),
            2 * once.model().word_count(&"spam", token)
        );
    }
    assert_eq!(
        twice.model().document_count(&"spam"),
        2 * once.model().document_count(&"spam")
    );
    assert_eq!(twice.model().vocabulary_size(), once.model().vocabulary_size());
    Ok(())
}

#[test]
fn test_smoothed_probabilities_are_positive() -> Result<()> {
    let classifier = spam_classifier()?;
    let model = classifier.model();

    let classes: Vec<String> = model.classes().cloned().collect();
    for class in &classes {
        for token in ["cheap", "agenda", "never-seen", "zebra"] {
            let p = model.word_probability(class, token).unwrap();
            assert!(p > 0.0, "P({token}|{class}) = {p}");
        }
    }
    Ok(())
}

#[test]
fn test_classification_is_deterministic() -> Result<()> {
    let classifier = spam_classifier()?;

    let first = classifier.classify("agenda for the cheap meeting")?;
    for _ in 0..10 {
        assert_eq!(classifier.classify("agenda for the cheap meeting")?, first);
    }
    Ok(())
}

#[test]
fn test_vocabulary_never_shrinks() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::default();
    let mut previous = 0;

    for (document, label) in [
        ("cheap loans now", "spam"),
        ("", "ham"),
        ("cheap loans now", "spam"),
        ("meeting agenda", "ham"),
        ("MEETING", "ham"),
    ] {
        classifier.train(document, label)?;
        let size = classifier.model().vocabulary_size();
        assert!(size >= previous);
        previous = size;
    }

    assert_eq!(previous, 5);
    Ok(())
}

#[test]
fn test_conditional_probabilities_are_not_a_distribution_over_all_tokens() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::default();
    classifier.train("cheap loans now cheap", "spam")?;
    let model = classifier.model();

    let vocabulary = ["cheap", "loans", "now"];
    let over_vocabulary: f64 = vocabulary
        .iter()
        .map(|token| model.word_probability(&"spam", token).unwrap())
        .sum();
    let unseen = model.word_probability(&"spam", "offer").unwrap();

    // Unseen tokens receive mass on top of whatever the vocabulary holds,
    // so the conditionals cannot be read as one normalized distribution.
    assert!(unseen > 0.0);
    assert!(over_vocabulary + unseen > 1.0);
    Ok(())
}

#[test]
fn test_ties_keep_the_first_trained_class() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::default();
    classifier.train("alpha", "first")?;
    classifier.train("beta", "second")?;
    assert_eq!(classifier.classify("gamma")?, "first");

    let mut classifier = NaiveBayesClassifier::default();
    classifier.train("beta", "second")?;
    classifier.train("alpha", "first")?;
    assert_eq!(classifier.classify("gamma")?, "second");
    Ok(())
}

#[test]
fn test_training_order_does_not_change_counts() -> Result<()> {
    let mut forward = NaiveBayesClassifier::default();
    forward.train("cheap loans", "spam")?;
    forward.train("agenda", "ham")?;

    let mut backward = NaiveBayesClassifier::default();
    backward.train("agenda", "ham")?;
    backward.train("cheap loans", "spam")?;

    for classifier in [&forward, &backward] {
        let model = classifier.model();
        assert_eq!(model.total_documents(), 2);
        assert_eq!(model.total_word_count(&"spam"), 2);
        assert_eq!(model.total_word_count(&"ham"), 1);
    }
    assert_eq!(
        forward.model().classes().collect::<Vec<_>>(),
        vec![&"spam", &"ham"]
    );
    assert_eq!(
        backward.model().classes().collect::<Vec<_>>(),
        vec![&"ham", &"spam"]
    );
    Ok(())
}

#[test]
fn test_custom_tokenizer_adapter() -> Result<()> {
    let analyzer = Arc::new(PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new())));
    let mut classifier = NaiveBayesClassifier::new(analyzer);

    classifier.train("東京 大阪 名古屋", "city")?;
    classifier.train("りんご みかん ぶどう", "fruit")?;

    assert_eq!(classifier.classify("大阪 みかん 東京")?, "city");
    Ok(())
}

#[test]
fn test_enum_labels() -> Result<()> {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Sentiment {
        Positive,
        Negative,
    }

    let mut classifier = NaiveBayesClassifier::default();
    classifier.train("great product, loved it", Sentiment::Positive)?;
    classifier.train("terrible, broke after a day", Sentiment::Negative)?;
    classifier.train("loved the great service", Sentiment::Positive)?;

    assert_eq!(classifier.classify("great service")?, Sentiment::Positive);
    assert_eq!(classifier.classify("broke after a terrible day")?, Sentiment::Negative);

    let posteriors = classifier.posteriors("great service")?;
    let total: f64 = posteriors.iter().map(|p| p.score).sum();
    assert!((total - 1.0).abs() < 1e-12);
    Ok(())
}
