#[cfg(test)]
pub mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::SystemTime;

    static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// Create a fresh, empty folder under the system temp dir.
    pub fn temp_dir() -> PathBuf {
        let timestamp = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap().as_micros();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let buf = std::env::temp_dir().join(format!(
            "nodewar-attendance-{}-{timestamp}-{counter}",
            std::process::id()
        ));
        fs::create_dir(&buf).unwrap();

        buf
    }

    pub fn write_file(folder: &Path, filename: &str, content: &str) -> PathBuf {
        let path = folder.join(filename);
        fs::write(&path, content).unwrap();

        path
    }

    pub const ROSTER_HEADER: &str = "MemberId,DiscordName,FamilyName,CharacterName";
    pub const ATTENDANCE_HEADER: &str = "MemberId,NodewarId,FamilyName,CharacterName,Attendance";

    pub fn roster(rows: &[&str]) -> String {
        with_header(ROSTER_HEADER, rows)
    }

    pub fn attendance(rows: &[&str]) -> String {
        with_header(ATTENDANCE_HEADER, rows)
    }

    fn with_header(header: &str, rows: &[&str]) -> String {
        let mut content = header.to_owned();
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }

        content
    }
}
