//! Path helpers shared by the resolvers.

use std::path::{Component, Path, PathBuf};

/// Join `tail` onto `base` when `base` is known.
pub(crate) fn join_opt(base: Option<&Path>, tail: impl AsRef<Path>) -> Option<PathBuf> {
  base.map(|base| base.join(tail))
}

/// Normalize a path by resolving `.` and `..` components lexically, without
/// touching the filesystem.
///
/// A `..` that cannot be folded into a preceding normal component is kept, and
/// a `..` directly under the root is dropped.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
  let mut components: Vec<Component<'_>> = Vec::new();

  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => match components.last() {
        Some(Component::Normal(_)) => {
          components.pop();
        }
        Some(Component::RootDir | Component::Prefix(_)) => {}
        _ => components.push(component),
      },
      other => components.push(other),
    }
  }

  components.iter().collect()
}
