use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// A roster CSV on disk, removed when dropped.
pub struct RosterFile {
    file: NamedTempFile,
}

impl RosterFile {
    pub fn with_rows(rows: &[&str]) -> Self {
        let mut content = String::from("stu_id,stu_name,year,subject\n");
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        Self::with_content(&content)
    }

    pub fn with_content(content: &str) -> Self {
        let mut file = NamedTempFile::new().expect("create roster file failed");
        file.write_all(content.as_bytes())
            .expect("write roster file failed");
        Self { file }
    }

    pub fn path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }
}
