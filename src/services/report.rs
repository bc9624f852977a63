// src/services/report.rs

use crate::{
    models::{
        exam::ExamDetail,
        exam_result::{ExamResult, ResultStatus},
    },
    utils::{html::escape_html, time::display_datetime},
};

/// Renders the HTML result notification sent to a student.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    institution_name: String,
}

impl ReportRenderer {
    pub fn new(institution_name: impl Into<String>) -> Self {
        Self {
            institution_name: institution_name.into(),
        }
    }

    /// `"<grade> - <exam> Examination Result"`
    pub fn subject(&self, exam: &ExamDetail) -> String {
        format!("{} - {} Examination Result", exam.grade_name, exam.name)
    }

    pub fn render(&self, exam: &ExamDetail, result: &ExamResult) -> String {
        let color = match result.result_status {
            ResultStatus::Pass => "green",
            ResultStatus::Fail => "red",
        };
        let message = result.result_status.message().text();

        let mut body = String::new();
        body.push_str("<html><body>");
        body.push_str("<h3>Dear Student,</h3>");
        body.push_str(
            "<p>We hope this email finds you well. We want to inform you about the results of your recent exam.</p>",
        );
        body.push_str(&format!(
            "<p><span style='color: {};'><b>{}</b></span></p>",
            color, message
        ));

        body.push_str("<h3>Exam Detail:</h3>");
        body.push_str(&format!(
            "<p>Timing: {} to {}</p>",
            display_datetime(&exam.start_time),
            display_datetime(&exam.end_time)
        ));
        body.push_str("<table border='1'>");
        body.push_str("<tr><th>Grade</th><th>Course</th><th>Exam</th></tr>");
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&exam.grade_name),
            escape_html(&exam.course_name),
            escape_html(&exam.name)
        ));
        body.push_str("</table>");

        body.push_str("<h3>Exam Result:</h3>");
        body.push_str("<table border='1'>");
        body.push_str(
            "<tr><th>Total Questions</th><th>Total Correct Answers</th><th>Total Wrong Answers</th></tr>",
        );
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            result.total_questions, result.total_correct_answers, result.total_wrong_answers
        ));
        body.push_str("</table>");

        body.push_str(&format!(
            "<p><b>Total Score: {}/{}</b></p>",
            result.score, result.total_marks
        ));
        body.push_str(&format!("<p><b>Percentage: {:.2}%</b></p>", result.percentage));
        body.push_str(&format!(
            "<p><span style='color: {};'><b>Result: {}</b></span></p>",
            color,
            result.result_status.as_str()
        ));

        body.push_str(&format!(
            "<p>Best Regards,<br/>{}</p>",
            escape_html(&self.institution_name)
        ));
        body.push_str("</body></html>");

        body
    }
}
