//! Embeds the git commit into `edl --version` for dev builds.
//!
//! Builds with the `release` feature skip this and report the bare crate
//! version.

fn main() {
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = GitclBuilder::default()
            .sha(true)
            .build()
            .expect("git sha instruction is valid");

        let emitted = Emitter::default()
            .add_instructions(&git)
            .and_then(|emitter| emitter.emit());
        if let Err(e) = emitted {
            // Source tarballs have no .git; cli.rs still expects the variable.
            println!("cargo:warning=No git sha for the version string: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
