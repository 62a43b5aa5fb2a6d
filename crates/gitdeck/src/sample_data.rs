//! Hard-coded repository data rendered by the demo dashboard.
//!
//! Stands in for a real git or CI backend: a small frontend repository, its
//! file forest, a pipeline with one deploy still running and the source text
//! shown for whichever file is selected.

use crate::domain::pipeline::{Step, StepStatus};
use crate::domain::repository::{Commit, Repository};
use crate::domain::tree::TreeNode;

/// Run number shown in the pipeline panel heading.
pub const SAMPLE_RUN_NUMBER: u32 = 123;

pub fn sample_repository() -> Repository {
    let branches = [
        "main",
        "develop",
        "feature/auth",
        "feature/ui-redesign",
        "bugfix/login",
    ];

    Repository::new("acme-org", "frontend", "main")
        .with_id("repo-1")
        .with_description("React frontend application with TypeScript and Tailwind CSS")
        .with_branches(branches.into_iter().map(str::to_string).collect())
        .with_last_commit(Commit::new(
            "a1b2c3d",
            "Add authentication service",
            "John Doe",
            "2 days ago",
        ))
}

pub fn sample_forest() -> Vec<TreeNode> {
    vec![
        TreeNode::folder(
            "src",
            vec![
                TreeNode::folder(
                    "components",
                    vec![
                        TreeNode::file("Button.tsx"),
                        TreeNode::file("Card.tsx"),
                        TreeNode::file("Input.tsx"),
                    ],
                ),
                TreeNode::folder(
                    "pages",
                    vec![
                        TreeNode::file("Home.tsx"),
                        TreeNode::file("About.tsx"),
                        TreeNode::file("Contact.tsx"),
                    ],
                ),
                TreeNode::file("App.tsx"),
                TreeNode::file("main.tsx"),
            ],
        ),
        TreeNode::file("package.json"),
        TreeNode::file("tsconfig.json"),
        TreeNode::file("README.md"),
    ]
}

pub fn sample_steps() -> Vec<Step> {
    vec![
        Step::new("Build", StepStatus::Success).with_duration("45s"),
        Step::new("Test", StepStatus::Success).with_duration("2m 30s"),
        Step::new("Lint", StepStatus::Success).with_duration("35s"),
        Step::new("Deploy", StepStatus::Running),
    ]
}

pub fn sample_code() -> String {
    [
        "import React from 'react';",
        "import { Button } from './components/Button';",
        "",
        "function App() {",
        "  return (",
        "    <div className=\"container mx-auto px-4 py-8\">",
        "      <h1 className=\"text-3xl font-bold mb-4\">",
        "        Welcome to our application",
        "      </h1>",
        "      <p className=\"mb-4\">",
        "        This is a sample React application built with TypeScript and Tailwind CSS.",
        "      </p>",
        "      <Button variant=\"primary\">",
        "        Get Started",
        "      </Button>",
        "    </div>",
        "  );",
        "}",
        "",
        "export default App;",
    ]
    .join("\n")
}
