//! JSON output formatting for list command

use qna_core::error::Result;
use qna_core::query::QueryHit;

/// Output in JSON format
pub fn output_json(hits: &[QueryHit], show_scores: bool) -> Result<()> {
    let output: Vec<_> = hits
        .iter()
        .map(|hit| {
            let mut json = hit.record.to_json();
            if let (true, Some(score), Some(obj)) = (show_scores, hit.score, json.as_object_mut()) {
                obj.insert("score".to_string(), serde_json::json!(score));
            }
            json
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
