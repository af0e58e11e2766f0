use crate::models::question::SingleChoiceQuestion;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeReport {
    pub grade: i32,
    pub max_grade: i32,
    pub correct_answers: usize,
    pub answered_questions: usize,
}

pub struct GradingService;

impl GradingService {
    /// Sums the points of every question whose answer text equals its
    /// correct option. Unanswered or wrong answers contribute nothing.
    /// Totals saturate at `i32::MAX`; surveys loaded through
    /// `single_choice_questions` never reach it.
    pub fn grade(questions: &[SingleChoiceQuestion], answers: &HashMap<i64, String>) -> GradeReport {
        let mut report = GradeReport {
            grade: 0,
            max_grade: 0,
            correct_answers: 0,
            answered_questions: 0,
        };

        for q in questions {
            report.max_grade = report.max_grade.saturating_add(q.points());
            let Some(answer) = answers.get(&q.id()) else {
                continue;
            };
            report.answered_questions += 1;
            if q.is_correct(answer) {
                report.grade = report.grade.saturating_add(q.points());
                report.correct_answers += 1;
            }
        }

        report
    }
}
