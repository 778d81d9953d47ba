//! Extractive summarization over transcript text.
//!
//! Sentence-level TextRank: sentences are graph nodes, edges are weighted
//! by word overlap, scores come from a damped power iteration, and the top
//! sentences are emitted in document order.

use std::collections::HashSet;

const DAMPING: f64 = 0.85;
const CONVERGENCE: f64 = 1e-4;
const MAX_ITERATIONS: usize = 50;

/// Reduce `text` to at most `max_sentences` sentences.
///
/// Input at or below the limit comes back whole, joined on single spaces.
pub fn summarize_text(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= max_sentences {
        return sentences.join(" ");
    }

    let scores = rank(&sentences);
    let mut order: Vec<usize> = (0..sentences.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut picked: Vec<usize> = order.into_iter().take(max_sentences).collect();
    picked.sort_unstable();
    picked
        .into_iter()
        .map(|i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split on terminal punctuation followed by whitespace or end of input.
///
/// Good enough for caption text; decimals and mid-token dots survive
/// because they are not followed by whitespace.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        let at_boundary = matches!(ch, '.' | '!' | '?')
            && chars.peek().map_or(true, |next| next.is_whitespace());
        if at_boundary {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| word.len() > 2)
        .map(|word| word.to_lowercase())
        .collect()
}

/// Word overlap normalized by sentence lengths, the classic TextRank edge
/// weight. Sentences under two tokens contribute nothing.
fn similarity(a: &[String], b: &[String]) -> f64 {
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }
    let a_set: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b_set: HashSet<&str> = b.iter().map(String::as_str).collect();
    let common = a_set.intersection(&b_set).count();
    if common == 0 {
        return 0.0;
    }
    common as f64 / ((a.len() as f64).ln() + (b.len() as f64).ln())
}

fn rank(sentences: &[String]) -> Vec<f64> {
    let tokens: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s)).collect();
    let n = sentences.len();

    let mut weights = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let w = similarity(&tokens[i], &tokens[j]);
            weights[i][j] = w;
            weights[j][i] = w;
        }
    }
    let out_sum: Vec<f64> = weights.iter().map(|row| row.iter().sum()).collect();

    let mut scores = vec![1.0f64; n];
    for _ in 0..MAX_ITERATIONS {
        let mut next = vec![1.0 - DAMPING; n];
        for i in 0..n {
            for j in 0..n {
                if weights[j][i] > 0.0 && out_sum[j] > 0.0 {
                    next[i] += DAMPING * weights[j][i] / out_sum[j] * scores[j];
                }
            }
        }
        let delta: f64 = next.iter().zip(&scores).map(|(a, b)| (a - b).abs()).sum();
        scores = next;
        if delta < CONVERGENCE {
            break;
        }
    }
    scores
}
