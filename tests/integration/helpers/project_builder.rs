use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use git2::{IndexAddOption, Repository, Signature};

use crate::helpers::project::Project;

pub struct ProjectBuilder {
    files: Vec<(String, Vec<u8>)>,
    root: tempfile::TempDir,
    git: bool,
    branch: Option<String>,
}

pub fn tempdir() -> ProjectBuilder {
    ProjectBuilder {
        files: Vec::new(),
        root: tempfile::Builder::new().prefix("butler").tempdir().unwrap(),
        git: false,
        branch: None,
    }
}

/// writes a `butler.toml` listing `templates` as `(name, url)` pairs
pub fn write_config(dir: &Path, templates: &[(&str, &str)]) -> PathBuf {
    let path = dir.join("butler.toml");
    let mut contents = String::new();
    for (name, url) in templates {
        contents.push_str(&format!("[[templates]]\nname = '{name}'\nurl = '{url}'\n\n"));
    }
    fs::write(&path, contents).unwrap();
    path
}

impl ProjectBuilder {
    /// builds the template used by most tests
    /// - `README.md` greeting the project
    /// - a stale copy below `node_modules`
    pub fn with_default_template(self) -> Self {
        self.file("README.md", "Hello [[ .ProjectName ]]")
            .file("node_modules/stale.md", "[[ .ProjectName ]]")
    }

    pub fn file(self, name: &str, contents: impl AsRef<str>) -> Self {
        self.bytes(name, contents.as_ref().as_bytes())
    }

    pub fn bytes(mut self, name: &str, contents: &[u8]) -> Self {
        self.files.retain(|(f, _)| f != name);
        self.files.push((name.to_string(), contents.to_vec()));
        self
    }

    pub fn init_git(mut self) -> Self {
        self.git = true;
        self
    }

    /// commit the files to `branch` only, leaving `main` with a dummy file
    pub fn branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_owned());
        self
    }

    fn commit_all(repo: &Repository, message: &str) {
        let mut index = repo.index().unwrap();
        index
            .add_all(["*"], IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let signature = Signature::now("Foo Bar", "foo@bar.com").unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();
        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )
        .unwrap();
    }

    fn write_files(&self) {
        let path = self.root.path();
        for (file, contents) in self.files.iter() {
            let path = path.join(file);
            let parent = path
                .parent()
                .unwrap_or_else(|| panic!("couldn't find parent dir of {path:?}"));

            fs::create_dir_all(parent)
                .unwrap_or_else(|_| panic!("couldn't create {parent:?} directory"));

            fs::File::create(&path)
                .unwrap_or_else(|_| panic!("couldn't create file {path:?}"))
                .write_all(contents)
                .unwrap_or_else(|_| panic!("couldn't write to file {path:?}"));
        }
    }

    pub fn build(self) -> Project {
        let path = self.root.path();

        if !self.git {
            self.write_files();
            return Project { root: self.root };
        }

        let repo = Repository::init(path).unwrap();
        // pin the initial branch so `init.defaultBranch` does not matter
        repo.set_head("refs/heads/main").unwrap();

        if let Some(ref branch) = self.branch {
            fs::write(path.join("dummy.txt"), "main dummy").unwrap();
            Self::commit_all(&repo, "initial main commit");

            let head = repo.head().unwrap().peel_to_commit().unwrap();
            repo.branch(branch, &head, false).unwrap();
            repo.set_head(&format!("refs/heads/{branch}")).unwrap();
        }

        self.write_files();
        Self::commit_all(&repo, "initial commit");

        if self.branch.is_some() {
            repo.set_head("refs/heads/main").unwrap();
            repo.checkout_head(Some(git2::build::CheckoutBuilder::new().force()))
                .unwrap();
        }

        drop(repo);
        Project { root: self.root }
    }
}
