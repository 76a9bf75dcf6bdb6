use crate::modules::students::core::student::Student;
use crate::shell::state::AppState;

pub struct StudentBuilder {
    inner: Student,
}

impl StudentBuilder {
    pub fn new() -> Self {
        Self {
            inner: Student {
                stu_id: 1,
                stu_name: "Asha Rao".to_string(),
                year: 2,
                subject: "CS301".to_string(),
            },
        }
    }

    pub fn stu_id(mut self, v: i64) -> Self {
        self.inner.stu_id = v;
        self
    }

    pub fn stu_name(mut self, v: impl Into<String>) -> Self {
        self.inner.stu_name = v.into();
        self
    }

    pub fn year(mut self, v: u32) -> Self {
        self.inner.year = v;
        self
    }

    pub fn subject(mut self, v: impl Into<String>) -> Self {
        self.inner.subject = v.into();
        self
    }

    pub fn build(self) -> Student {
        self.inner
    }
}

pub async fn seed_students(state: &AppState, students: Vec<Student>) {
    state
        .students
        .insert_many(students)
        .await
        .expect("seed students failed");
}
