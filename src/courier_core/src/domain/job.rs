use std::path::{Path, PathBuf};

use url::Url;
use uuid::Uuid;

/// A completed conversion task, ready to be mailed to the user who asked for it.
///
/// Jobs are created and owned upstream. Delivery only reads them, and hands them
/// to [`Cleanup`](crate::Cleanup) once the email went out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    id: Uuid,
    url: Url,
    email: String,
    title: String,
    file_path: PathBuf,
    file_name: String,
}

impl Job {
    pub fn new(
        url: Url,
        email: impl Into<String>,
        title: impl Into<String>,
        file_path: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            email: email.into(),
            title: title.into(),
            file_path: file_path.into(),
            file_name: file_name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Source URL the document was converted from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Recipient address
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Location of the converted file on disk
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Name the attachment is given in the email
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
