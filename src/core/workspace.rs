//! Workspace path validation.
//!
//! Every file tool and the `workspace://` resource resolve caller-supplied
//! filenames against the configured workspace root. Validation is lexical:
//! absolute paths and any `..` component are rejected before the path ever
//! touches the filesystem, so operations cannot escape the root.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while resolving a filename inside the workspace.
#[derive(Debug, Error)]
pub enum WorkspacePathError {
    /// The filename was empty.
    #[error("filename must not be empty")]
    Empty,

    /// The filename was an absolute path.
    #[error("filename '{0}' must be relative to the workspace root")]
    Absolute(String),

    /// The filename contained a `..` component.
    #[error("filename '{0}' must not contain '..' components")]
    ParentTraversal(String),
}

/// Resolve a caller-supplied filename to a path inside the workspace root.
///
/// Filenames may name subdirectories (`notes/todo.txt`); `.` components are
/// ignored. The returned path is `root` joined with the remaining normal
/// components.
pub fn resolve_workspace_path(root: &Path, filename: &str) -> Result<PathBuf, WorkspacePathError> {
    if filename.is_empty() {
        return Err(WorkspacePathError::Empty);
    }

    let mut resolved = root.to_path_buf();
    let mut any_normal = false;

    for component in Path::new(filename).components() {
        match component {
            Component::Normal(part) => {
                any_normal = true;
                resolved.push(part);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(WorkspacePathError::ParentTraversal(filename.to_string()));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(WorkspacePathError::Absolute(filename.to_string()));
            }
        }
    }

    if !any_normal {
        return Err(WorkspacePathError::Empty);
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_filename() {
        let resolved = resolve_workspace_path(Path::new("/ws"), "a.txt").unwrap();
        assert_eq!(resolved, PathBuf::from("/ws/a.txt"));
    }

    #[test]
    fn test_subdirectory_filename() {
        let resolved = resolve_workspace_path(Path::new("/ws"), "notes/todo.txt").unwrap();
        assert_eq!(resolved, PathBuf::from("/ws/notes/todo.txt"));
    }

    #[test]
    fn test_current_dir_components_ignored() {
        let resolved = resolve_workspace_path(Path::new("/ws"), "./a.txt").unwrap();
        assert_eq!(resolved, PathBuf::from("/ws/a.txt"));
    }

    #[test]
    fn test_empty_filename_rejected() {
        assert!(matches!(
            resolve_workspace_path(Path::new("/ws"), ""),
            Err(WorkspacePathError::Empty)
        ));
        assert!(matches!(
            resolve_workspace_path(Path::new("/ws"), "."),
            Err(WorkspacePathError::Empty)
        ));
    }

    #[test]
    fn test_absolute_path_rejected() {
        assert!(matches!(
            resolve_workspace_path(Path::new("/ws"), "/etc/passwd"),
            Err(WorkspacePathError::Absolute(_))
        ));
    }

    #[test]
    fn test_parent_traversal_rejected() {
        assert!(matches!(
            resolve_workspace_path(Path::new("/ws"), "../outside.txt"),
            Err(WorkspacePathError::ParentTraversal(_))
        ));
        assert!(matches!(
            resolve_workspace_path(Path::new("/ws"), "notes/../../outside.txt"),
            Err(WorkspacePathError::ParentTraversal(_))
        ));
    }
}
