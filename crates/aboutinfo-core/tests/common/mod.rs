//! On-disk install directory fixtures.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub struct Install {
    pub dir: TempDir,
}

impl Install {
    pub fn new() -> Self {
        Install {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(self, rel: &str, body: &[u8]) -> Self {
        let p = self.dir.path().join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, body).unwrap();
        self
    }
}

/// A feature with a root about file, French localization and a feature image.
pub fn localized_feature() -> Install {
    Install::new()
        .file(
            "feature.toml",
            br#"
                id = "org.example.editor"
                version = "3.2.1"
                label = "Example Editor"
                provider_name = "Example Corp"
            "#,
        )
        .file(
            "about.ini",
            b"aboutText=%about\nappName=editor\nfeatureImage=feature.png\nwindowImage=win.png\nwelcomePage=welcome.html\n",
        )
        .file("about.properties", b"%about=Example Editor, build {0}\n")
        .file("nl/fr/about.properties", b"%about=\\u00c9diteur, version {0} {1}\n")
        .file("about.mappings", b"0=20261018\n1=beta\n3=never\n")
        .file("feature.png", b"123456789")
        .file("nl/fr/CA/win.png", b"canadian window")
}
