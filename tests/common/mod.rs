#![allow(dead_code)]

use portal_indexer::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DIAGRAM_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 1, 2, 255];

/// A content tree laid out like a knowledge-base repository, with the
/// portal's outputs directed into the same temporary directory.
pub struct ContentFixture {
    pub temp_dir: TempDir,
}

impl ContentFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// The knowledge base used by most tests.
    pub fn knowledge_base() -> Self {
        let fixture = Self::new();

        fixture.write(
            "payments-outage/README.md",
            "# Payments Outage\nSummary text here.",
        );
        fixture.write("payments-outage/RUNBOOK.md", "Steps...");
        fixture.write_bytes("payments-outage/assets/diagram.png", DIAGRAM_BYTES);

        fixture.write(
            "incident-response/WORKSHOP.md",
            "---\ntitle: Tabletop\n---\n# Tabletop exercise\nRun through [the checklist](./checklist.md).",
        );
        fixture.write("incident-response/BUSINESS.md", "Why incidents cost money.");
        fixture.write("incident-response/RUNBOOK.md", "## Declare\nOpen a channel.");

        fixture.write("drafts/notes.md", "Not a recognized document");
        fixture.write(".hidden/README.md", "# Hidden");
        fixture.write("website/README.md", "# Website");
        fixture.write("README.md", "# Knowledge base root");

        fixture
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn content_root(&self) -> PathBuf {
        self.root().join("content")
    }

    pub fn write(&self, relative: &str, contents: &str) {
        self.write_bytes(relative, contents.as_bytes());
    }

    pub fn write_bytes(&self, relative: &str, contents: &[u8]) {
        let path = self.content_root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root().join("site/src/data")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root().join("site/public/images/topics")
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.content.root = self.content_root();
        config.output.data_dir = self.data_dir();
        config.output.assets_dir = self.assets_dir();
        config
    }

    /// Writes `portal-indexer.toml` at the fixture root with relative paths,
    /// for running the binary from that directory.
    pub fn write_config_file(&self) {
        fs::write(
            self.root().join("portal-indexer.toml"),
            "[content]\nroot = \"content\"\n\n[output]\ndata_dir = \"site/src/data\"\nassets_dir = \"site/public/images/topics\"\n",
        )
        .unwrap();
    }

    pub fn read_output(&self, file: &str) -> String {
        fs::read_to_string(self.data_dir().join(file)).unwrap()
    }
}
