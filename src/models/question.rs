use serde::{Deserialize, Serialize};

/// Question as the backend sends it inside a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: i64,
    pub question_text: String,
    #[serde(default)]
    pub question_points: i32,
    #[serde(default)]
    pub question_options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_option_id: Option<i64>,
    pub option_text: String,
    #[serde(default)]
    pub is_answer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionShapeError {
    #[error("question {0} has no options")]
    NoOptions(i64),
    #[error("question {0} has no correct option")]
    NoCorrectOption(i64),
    #[error("question {0} has {1} correct options")]
    SeveralCorrectOptions(i64, usize),
    #[error("question {0} has negative points")]
    NegativePoints(i64),
    #[error("total points exceed {}", i32::MAX)]
    PointsOverflow,
}

/// A question with exactly one correct option.
///
/// The only way to get one is through [`SingleChoiceQuestion::new`] (or the
/// `TryFrom<&Question>` impl), so a value of this type always satisfies the
/// single-answer invariant and has non-negative points.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleChoiceQuestion {
    id: i64,
    text: String,
    points: i32,
    options: Vec<String>,
    correct: usize,
}

impl SingleChoiceQuestion {
    pub fn new(
        id: i64,
        text: impl Into<String>,
        points: i32,
        options: Vec<(String, bool)>,
    ) -> Result<Self, QuestionShapeError> {
        if options.is_empty() {
            return Err(QuestionShapeError::NoOptions(id));
        }
        if points < 0 {
            return Err(QuestionShapeError::NegativePoints(id));
        }
        let correct: Vec<usize> = options
            .iter()
            .enumerate()
            .filter(|(_, (_, is_answer))| *is_answer)
            .map(|(idx, _)| idx)
            .collect();
        let correct = match correct.as_slice() {
            [] => return Err(QuestionShapeError::NoCorrectOption(id)),
            [only] => *only,
            many => return Err(QuestionShapeError::SeveralCorrectOptions(id, many.len())),
        };

        Ok(Self {
            id,
            text: text.into(),
            points,
            options: options.into_iter().map(|(text, _)| text).collect(),
            correct,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct]
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_option() == answer
    }
}

impl TryFrom<&Question> for SingleChoiceQuestion {
    type Error = QuestionShapeError;

    fn try_from(q: &Question) -> Result<Self, Self::Error> {
        SingleChoiceQuestion::new(
            q.question_id,
            q.question_text.clone(),
            q.question_points,
            q.question_options
                .iter()
                .map(|o| (o.option_text.clone(), o.is_answer))
                .collect(),
        )
    }
}

/// Sum of points, or `PointsOverflow` when it does not fit a grade.
pub fn total_points(points: impl IntoIterator<Item = i32>) -> Result<i32, QuestionShapeError> {
    points
        .into_iter()
        .try_fold(0i32, |acc, p| acc.checked_add(p))
        .ok_or(QuestionShapeError::PointsOverflow)
}

/// Validates every question of a survey and that its grade cannot overflow.
pub fn single_choice_questions(
    questions: &[Question],
) -> Result<Vec<SingleChoiceQuestion>, QuestionShapeError> {
    let validated: Vec<SingleChoiceQuestion> = questions
        .iter()
        .map(SingleChoiceQuestion::try_from)
        .collect::<Result<_, _>>()?;
    total_points(validated.iter().map(SingleChoiceQuestion::points))?;
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(correct: &[bool]) -> Vec<(String, bool)> {
        correct
            .iter()
            .enumerate()
            .map(|(i, c)| (format!("Option {}", i + 1), *c))
            .collect()
    }

    #[test]
    fn exactly_one_correct_option_is_accepted() {
        let q = SingleChoiceQuestion::new(7, "2+2?", 5, opts(&[false, true, false])).unwrap();
        assert_eq!(q.correct_option(), "Option 2");
        assert!(q.is_correct("Option 2"));
        assert!(!q.is_correct("Option 1"));
    }

    #[test]
    fn missing_or_duplicate_answers_are_rejected() {
        assert_eq!(
            SingleChoiceQuestion::new(1, "q", 1, opts(&[false, false])),
            Err(QuestionShapeError::NoCorrectOption(1))
        );
        assert_eq!(
            SingleChoiceQuestion::new(2, "q", 1, opts(&[true, true, false])),
            Err(QuestionShapeError::SeveralCorrectOptions(2, 2))
        );
        assert_eq!(
            SingleChoiceQuestion::new(3, "q", 1, vec![]),
            Err(QuestionShapeError::NoOptions(3))
        );
        assert_eq!(
            SingleChoiceQuestion::new(4, "q", -1, opts(&[true])),
            Err(QuestionShapeError::NegativePoints(4))
        );
    }

    #[test]
    fn survey_total_must_fit_a_grade() {
        let wire = |id: i64, points: i32| Question {
            question_id: id,
            question_text: format!("q{}", id),
            question_points: points,
            question_options: vec![QuestionOption {
                question_option_id: None,
                option_text: "yes".into(),
                is_answer: true,
            }],
        };
        assert_eq!(
            single_choice_questions(&[wire(1, i32::MAX), wire(2, 1)]),
            Err(QuestionShapeError::PointsOverflow)
        );
        assert_eq!(
            single_choice_questions(&[wire(1, i32::MAX - 1), wire(2, 1)])
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn wire_question_converts() {
        let wire: Question = serde_json::from_value(serde_json::json!({
            "questionId": 11,
            "questionText": "Capital of France?",
            "questionPoints": 3,
            "questionOptions": [
                {"questionOptionId": 1, "optionText": "Lyon", "isAnswer": false},
                {"questionOptionId": 2, "optionText": "Paris", "isAnswer": true}
            ]
        }))
        .unwrap();
        let q = SingleChoiceQuestion::try_from(&wire).unwrap();
        assert_eq!(q.id(), 11);
        assert_eq!(q.points(), 3);
        assert_eq!(q.correct_option(), "Paris");
    }
}
