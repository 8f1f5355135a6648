use assert_cmd::Command;
use assert_cmd::assert::Assert;
use assert_fs::TempDir;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct DemoTestHelper<'a> {
    pub work_dir: TempDir,
    name: &'a str,
    counter: AtomicUsize,
}

impl<'a> DemoTestHelper<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
            name,
            counter: AtomicUsize::new(0),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dialog-demo").unwrap();
        cmd.current_dir(self.work_dir.path())
            .env(
                "DIALOG_RUN_ID",
                format!(
                    "{}-{}",
                    self.name,
                    self.counter.fetch_add(1, Ordering::Relaxed)
                ),
            )
            .env_remove("DIALOG_CONFIG")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Run with `answers` fed to stdin, one line per dialog.
    pub fn run_with_answers(&self, args: &[&str], answers: &[&str]) -> Assert {
        let mut input = answers.join("\n");
        input.push('\n');
        self.command().args(args).write_stdin(input).assert()
    }

    pub fn run_command(&self, args: &[&str]) -> Assert {
        self.command().args(args).assert()
    }

    pub fn clean_work_dir(self) {
        self.work_dir.close().unwrap();
    }
}
