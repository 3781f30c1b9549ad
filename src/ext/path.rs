use std::path::{Component, Path, PathBuf};

/// Extension trait for Path used when paths end up inside a command line.
pub trait PathExt {
    /// Joins the normal components of a path with `/`, whatever the host
    /// separator is.
    ///
    /// Root, prefix and `.` components are dropped, so the result is only
    /// meaningful for relative paths.
    ///
    /// # Examples
    /// ```
    /// use antdg::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("src/routers/./dash");
    /// assert_eq!(path.to_slash_string(), "src/routers/dash");
    /// ```
    fn to_slash_string(&self) -> String;

    /// Returns the path relative to `root`, or `None` when the path is not a
    /// descendant of `root`.
    ///
    /// The comparison is component-wise, so `/ws/application` is not
    /// considered to be under `/ws/app`.
    fn relative_to(&self, root: &Path) -> Option<&Path>;

    /// Lexically resolves `.` and `..` components without touching the
    /// filesystem. A `..` above the root is dropped.
    fn normalize(&self) -> PathBuf;
}

impl PathExt for Path {
    fn to_slash_string(&self) -> String {
        self.components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy()),
                Component::ParentDir => Some("..".into()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    fn relative_to(&self, root: &Path) -> Option<&Path> {
        self.strip_prefix(root).ok()
    }

    fn normalize(&self) -> PathBuf {
        let mut normalized = PathBuf::new();
        for component in self.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match normalized.components().next_back() {
                    Some(Component::Normal(_)) => {
                        normalized.pop();
                    }
                    Some(Component::RootDir | Component::Prefix(_)) => {}
                    _ => normalized.push(".."),
                },
                other => normalized.push(other),
            }
        }
        normalized
    }
}
