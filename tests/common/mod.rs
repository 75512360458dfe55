#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the doc-guard binary.
#[macro_export]
macro_rules! doc_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("doc-guard"))
    };
}

/// An Angular component whose only problems are a console call and an
/// undocumented private method.
pub const CART_COMPONENT: &str = "\
import { Component } from '@angular/core';

@Component({ selector: 'app-cart' })
export class CartComponent {
  /** Items in the cart @public */
  public readonly items = signal<string[]>([]);

  /**
   * Add an item.
   * @public
   * @param {string} item - item to add
   * @returns {void}
   */
  public add(item: string): void {
    console.log(item);
  }

  private computeTotal(amount: number): number {
    return amount;
  }
}
";

/// Documented counterpart of [`CART_COMPONENT`] with no violations.
pub const CLEAN_COMPONENT: &str = "\
export class TotalsComponent {
  /** Running total @public */
  public readonly total = signal(0);

  /**
   * Add to the total.
   * @public
   * @param {number} amount - value to add
   * @returns {number} the new total
   */
  public add(amount: number): number {
    return amount;
  }
}
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.doc-guard.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".doc-guard.toml", content);
    }

    /// Runs git in the fixture directory.
    pub fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Initializes a repository with a committer identity.
    pub fn init_git(&self) {
        self.git(&["init", "-q", "-b", "main"]);
        self.git(&["config", "user.email", "test@test.com"]);
        self.git(&["config", "user.name", "Test User"]);
    }

    /// Stages and commits everything.
    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "."]);
        self.git(&["commit", "-q", "--no-gpg-sign", "-m", message]);
    }
}
