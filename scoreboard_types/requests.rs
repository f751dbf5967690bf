use serde::Deserialize;

use crate::{
    errors::ValidationError,
    leaderboard::{NewEntry, Score},
};

/// A score as sent by clients: a number, a boolean, or a string holding an integer.
///
/// Variant order matters for untagged deserialization: integers are tried
/// before floats, and anything unexpected lands in `Other` so that it's
/// reported as "not an integer" instead of a generic body error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScoreInput {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    Other(serde_json::Value),
}

impl ScoreInput {
    /// Coerces the raw input into a validated [`Score`].
    ///
    /// Floats are truncated toward zero (`10.9` is 10, `-0.5` is 0) and
    /// booleans count as 0 or 1. Strings must hold an integer: `"10.5"` is
    /// rejected.
    pub fn to_score(&self) -> Result<Score, ValidationError> {
        let value = match self {
            ScoreInput::Integer(value) => *value,
            ScoreInput::Float(value) => truncate_float(*value)?,
            ScoreInput::Boolean(value) => i64::from(*value),
            ScoreInput::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::ScoreNotInteger)?,
            ScoreInput::Other(_) => return Err(ValidationError::ScoreNotInteger),
        };

        Score::new(value)
    }
}

fn truncate_float(value: f64) -> Result<i64, ValidationError> {
    let value = value.trunc();
    // i64::MAX isn't exactly representable as f64, so the upper bound is exclusive.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if !value.is_finite() || !in_range {
        return Err(ValidationError::ScoreNotInteger);
    }
    Ok(value as i64)
}

/// Body of `POST /api/add`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddEntryRequest {
    pub name: Option<String>,
    pub score: Option<ScoreInput>,
}

impl AddEntryRequest {
    pub fn validate(self) -> Result<NewEntry, ValidationError> {
        let name = self.name.filter(|name| !name.is_empty());
        let (Some(name), Some(score)) = (name, self.score) else {
            return Err(ValidationError::MissingNameOrScore);
        };

        Ok(NewEntry {
            name,
            score: score.to_score()?,
        })
    }
}

/// Body of `PUT /api/update/{id}`. Only the score can change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScoreRequest {
    pub score: Option<ScoreInput>,
}

impl UpdateScoreRequest {
    pub fn validate(self) -> Result<Score, ValidationError> {
        self.score
            .ok_or(ValidationError::MissingScore)?
            .to_score()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn add_request(body: serde_json::Value) -> AddEntryRequest {
        serde_json::from_value(body).unwrap()
    }

    fn update_request(body: serde_json::Value) -> UpdateScoreRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_add_request_valid() {
        let entry = add_request(json!({ "name": "Alice", "score": 10 }))
            .validate()
            .unwrap();

        assert_eq!(entry.name, "Alice");
        assert_eq!(entry.score.value(), 10);
    }

    #[test]
    fn test_add_request_accepts_zero_and_coercible_scores() {
        let cases = [json!(0), json!("15"), json!(" 7 "), json!(3.0)];
        let expected = [0, 15, 7, 3];

        for (score, want) in cases.into_iter().zip(expected) {
            let entry = add_request(json!({ "name": "Bob", "score": score }))
                .validate()
                .unwrap();
            assert_eq!(entry.score.value(), want);
        }
    }

    #[test]
    fn test_add_request_missing_fields() {
        let bodies = [
            json!({}),
            json!({ "name": "Alice" }),
            json!({ "score": 10 }),
            json!({ "name": "Alice", "score": null }),
            json!({ "name": null, "score": 10 }),
            json!({ "name": "", "score": 10 }),
        ];

        for body in bodies {
            let err = add_request(body.clone()).validate().unwrap_err();
            assert_eq!(err, ValidationError::MissingNameOrScore, "body: {body}");
        }
    }

    #[test]
    fn test_add_request_score_not_integer() {
        let scores = [
            json!("ten"),
            json!("10.5"),
            json!([1]),
            json!({ "value": 1 }),
            json!(1e300),
        ];

        for score in scores {
            let err = add_request(json!({ "name": "Alice", "score": score.clone() }))
                .validate()
                .unwrap_err();
            assert_eq!(err, ValidationError::ScoreNotInteger, "score: {score}");
        }
    }

    #[test]
    fn test_add_request_truncates_floats_and_counts_booleans() {
        let cases = [
            (json!(10.5), 10),
            (json!(10.9), 10),
            (json!(-0.5), 0),
            (json!(true), 1),
            (json!(false), 0),
        ];

        for (score, want) in cases {
            let entry = add_request(json!({ "name": "A", "score": score.clone() }))
                .validate()
                .unwrap();
            assert_eq!(entry.score.value(), want, "score: {score}");
        }
    }

    #[test]
    fn test_add_request_negative_score() {
        for score in [json!(-1), json!("-20"), json!(-3.0), json!(-1.5)] {
            let err = add_request(json!({ "name": "Alice", "score": score }))
                .validate()
                .unwrap_err();
            assert_eq!(err, ValidationError::NegativeScore);
            assert_eq!(err.to_string(), "Score must be a positive integer");
        }
    }

    #[test]
    fn test_update_request_rules() {
        assert_eq!(
            update_request(json!({ "score": 5 })).validate().unwrap().value(),
            5
        );
        assert_eq!(
            update_request(json!({})).validate(),
            Err(ValidationError::MissingScore)
        );
        assert_eq!(
            update_request(json!({ "score": null })).validate(),
            Err(ValidationError::MissingScore)
        );
        assert_eq!(
            update_request(json!({ "score": "abc" })).validate(),
            Err(ValidationError::ScoreNotInteger)
        );
        assert_eq!(
            update_request(json!({ "score": -5 })).validate(),
            Err(ValidationError::NegativeScore)
        );
    }

    #[test]
    fn test_update_request_ignores_name() {
        let score = update_request(json!({ "name": "Mallory", "score": 1 }))
            .validate()
            .unwrap();
        assert_eq!(score.value(), 1);
    }
}
