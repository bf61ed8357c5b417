use std::{
    env,
    path::{Path, PathBuf},
};

// Switches the process working directory for the life of the guard,
// then puts the previous one back. Panics on failure; test use only.
//
// The working directory is process-wide, so every test that creates
// one of these must be marked #[serial].
pub(crate) struct TempCwd {
    previous: PathBuf,
}

impl TempCwd {
    #[allow(dead_code)]
    pub fn enter<P: AsRef<Path>>(dir: P) -> TempCwd {
        let previous = env::current_dir().unwrap();
        env::set_current_dir(dir.as_ref()).unwrap();
        TempCwd { previous }
    }
}

impl Drop for TempCwd {
    fn drop(&mut self) {
        env::set_current_dir(&self.previous).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use serial_test::serial;

    use super::TempCwd;

    #[test]
    #[serial]
    fn restores_previous_dir() {
        let before = env::current_dir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let target = fs::canonicalize(scratch.path()).unwrap();

        {
            let _cwd = TempCwd::enter(&target);
            assert_eq!(fs::canonicalize(env::current_dir().unwrap()).unwrap(), target);
        }

        assert_eq!(env::current_dir().unwrap(), before);
    }
}
