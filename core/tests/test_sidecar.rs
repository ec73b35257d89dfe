// Filename sidecar convention:
// encrypt appends a literal `.enc` to the full original name; decrypt
// strips exactly that suffix. The original extension rides along inside
// the encrypted filename.

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use blockpipe_core::sidecar::{append_extension, encrypted_path, file_extension, restored_path};

    #[test]
    fn extension_of_simple_name() {
        assert_eq!(file_extension(Path::new("report.pdf")), Some("pdf".into()));
    }

    #[test]
    fn extension_of_multi_dot_name_is_last_component() {
        assert_eq!(
            file_extension(Path::new("archive.tar.gz")),
            Some("gz".into())
        );
    }

    #[test]
    fn no_extension_is_none() {
        assert_eq!(file_extension(Path::new("Makefile")), None);
    }

    #[test]
    fn encrypted_name_keeps_original_extension() {
        assert_eq!(
            encrypted_path(Path::new("photos/cat.jpg")),
            PathBuf::from("photos/cat.jpg.enc")
        );
    }

    #[test]
    fn encrypted_name_for_extensionless_file() {
        assert_eq!(
            encrypted_path(Path::new("Makefile")),
            PathBuf::from("Makefile.enc")
        );
    }

    #[test]
    fn restore_strips_exactly_the_suffix() {
        assert_eq!(
            restored_path(Path::new("photos/cat.jpg.enc")).unwrap(),
            PathBuf::from("photos/cat.jpg")
        );
        assert_eq!(
            restored_path(Path::new("Makefile.enc")).unwrap(),
            PathBuf::from("Makefile")
        );
    }

    #[test]
    fn names_round_trip() {
        for name in ["a.bin", "archive.tar.gz", "noext", "dir/file.txt"] {
            let enc = encrypted_path(Path::new(name));
            assert_eq!(restored_path(&enc).unwrap(), PathBuf::from(name));
        }
    }

    #[test]
    fn restore_refuses_unsuffixed_names() {
        assert!(restored_path(Path::new("plain.pdf")).is_err());
        assert!(restored_path(Path::new("noext")).is_err());
    }

    #[test]
    fn append_extension_stacks_suffixes() {
        assert_eq!(
            append_extension(Path::new("file.txt"), "bak"),
            PathBuf::from("file.txt.bak")
        );
    }
}
