use std::path::{Path, PathBuf};

/// Filenames under which a distribution may ship the Tabula JAR.
const TABULA_JAR_NAMES: [&str; 2] = ["tabula.jar", "tabula-1.0.5-jar-with-dependencies.jar"];

/// Returns the bundled Tabula JAR (as a [String] for CLI parsing), if the process is running as
/// part of a distribution that ships one beside the executable or in its `lib` directory.
pub fn tabula_jar() -> Option<String> {
    let exec_path = std::env::current_exe().ok()?;
    let exec_dir = exec_path.parent()?;
    find_tabula_jar(exec_dir).and_then(|p| p.to_str().map(str::to_owned))
}

fn find_tabula_jar(exec_dir: &Path) -> Option<PathBuf> {
    [exec_dir.to_owned(), exec_dir.join("lib")]
        .iter()
        .flat_map(|dir| TABULA_JAR_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use googletest::prelude::*;

    use super::*;

    #[gtest]
    fn prefers_jar_beside_executable() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::create_dir(dir.path().join("lib"))?;
        std::fs::write(dir.path().join("lib").join("tabula.jar"), b"")?;
        std::fs::write(dir.path().join("tabula.jar"), b"")?;

        let found = find_tabula_jar(dir.path());

        expect_that!(found, some(eq(&dir.path().join("tabula.jar"))));
        Ok(())
    }

    #[gtest]
    fn finds_jar_in_lib_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::create_dir(dir.path().join("lib"))?;
        let jar = dir
            .path()
            .join("lib")
            .join("tabula-1.0.5-jar-with-dependencies.jar");
        std::fs::write(&jar, b"")?;

        expect_that!(find_tabula_jar(dir.path()), some(eq(&jar)));
        Ok(())
    }

    #[gtest]
    fn finds_nothing_without_jar() -> Result<()> {
        let dir = tempfile::tempdir()?;
        expect_that!(find_tabula_jar(dir.path()).is_none(), eq(true));
        Ok(())
    }
}
