use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::ignore::IgnoreRules;
use crate::artifacts::objects::blob::Blob;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Stage files for the next commit.
    ///
    /// Each argument expands to the files it names (a directory stages
    /// everything beneath it). Per file: paths matching the injected
    /// ignore predicate are skipped with a notice, everything else is
    /// stored as a blob and staged under its repository-relative name.
    /// The index is persisted once at the end.
    pub fn add(&mut self, paths: &[String], ignores: &IgnoreRules) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        let paths = paths
            .iter()
            .map(|path| self.workspace().list_files(Path::new(path)))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten();

        for path in paths {
            let name = Workspace::relative_name(&path)?;

            if ignores.matches(&name) {
                log::info!("skipping {}: matches an ignore prefix", name);
                writeln!(self.writer(), "Ignoring path: {}", name)?;
                continue;
            }

            let data = self.workspace().read_file(&path)?;
            let blob = Blob::new(data);
            let blob_id = self.database().store(&blob)?;

            index.add(name.clone(), blob_id);
            writeln!(self.writer(), "Staged {}", name)?;
        }

        index.write_updates()?;

        Ok(())
    }
}
