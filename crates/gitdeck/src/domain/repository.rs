use tracing::debug;

use crate::domain::pipeline::PipelineRun;

/// The most recent commit on the repository's default branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    pub author: String,
    /// Display-only relative date such as `2 days ago`.
    pub date: String,
    pub hash: String,
    pub message: String,
}

impl Commit {
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            date: date.into(),
            hash: hash.into(),
            message: message.into(),
        }
    }
}

/// Repository metadata shown in the dashboard header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repository {
    branches: Vec<String>,
    current_branch: usize,
    pub description: String,
    pub id: String,
    pub last_commit: Option<Commit>,
    pub name: String,
    pub owner: String,
}

impl Repository {
    /// Creates a repository with a single checked-out `branch`.
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        let owner = owner.into();
        let name = name.into();

        Self {
            branches: vec![branch.into()],
            current_branch: 0,
            description: String::new(),
            id: format!("{owner}/{name}"),
            last_commit: None,
            name,
            owner,
        }
    }

    /// Replaces the branch list; the first branch becomes current.
    ///
    /// An empty list keeps the existing branches.
    #[must_use]
    pub fn with_branches(mut self, branches: Vec<String>) -> Self {
        if !branches.is_empty() {
            self.branches = branches;
            self.current_branch = 0;
        }

        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();

        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();

        self
    }

    #[must_use]
    pub fn with_last_commit(mut self, commit: Commit) -> Self {
        self.last_commit = Some(commit);

        self
    }

    /// Returns the `owner/name` form used in headers.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    /// Returns the checked-out branch name.
    pub fn branch(&self) -> &str {
        self.branches
            .get(self.current_branch)
            .map_or("", String::as_str)
    }

    /// Describes pipeline run `run_number` as triggered by the last commit.
    ///
    /// Returns `None` when no commit is known.
    pub fn pipeline_run(&self, run_number: u32) -> Option<PipelineRun> {
        self.last_commit.as_ref().map(|commit| {
            PipelineRun::new(
                format!("{}-{run_number}", self.id),
                commit.author.clone(),
                commit.date.clone(),
            )
        })
    }

    /// Switches to the next branch, wrapping after the last one.
    pub fn cycle_branch(&mut self) {
        if self.branches.is_empty() {
            return;
        }

        self.current_branch = (self.current_branch + 1) % self.branches.len();
        debug!(branch = self.branch(), "switched branch");
    }
}
