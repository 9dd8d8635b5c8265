//! Native file dialogs over `rfd`.
//!
//! Cancellation and invocation failure both surface as `None`; failures
//! are logged. The pure request/filter types live in [`crate::types::dialog`]
//! so they stay testable without a display server.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::localization::Localization;
use crate::types::dialog::{DialogType, FileDialogRequest};

/// Shows a native file dialog described by `request`.
///
/// Returns the selected paths, or `None` when the user cancels. Folder
/// and save dialogs return a single-element vector.
pub fn show_file_dialog(request: &FileDialogRequest) -> Option<Vec<PathBuf>> {
    let strings = Localization::new();
    show_file_dialog_localized(request, &strings)
}

/// Same as [`show_file_dialog`] with caller-supplied strings.
pub fn show_file_dialog_localized(
    request: &FileDialogRequest,
    strings: &Localization,
) -> Option<Vec<PathBuf>> {
    let directory = request.effective_directory();
    debug!(?request.dialog_type, directory = %directory.display(), "opening file dialog");

    let mut dialog = rfd::FileDialog::new().set_directory(&directory);

    let mut has_filter = false;
    for filter in &request.filters {
        let extensions = filter.normalized_extensions();
        if extensions.is_empty() {
            continue;
        }
        dialog = dialog.add_filter(&filter.description, &extensions);
        has_filter = true;
    }
    if !has_filter && request.dialog_type != DialogType::Folder {
        dialog = dialog.add_filter(&strings.get("dialog.filter.all_files"), &["*"]);
    }

    let paths = match request.dialog_type {
        DialogType::Folder => dialog.pick_folder().map(|p| vec![p]),
        DialogType::Open if request.allow_multiple => dialog.pick_files(),
        DialogType::Open => dialog.pick_file().map(|p| vec![p]),
        DialogType::Save => {
            if !request.save_filename.is_empty() {
                dialog = dialog.set_file_name(&request.save_filename);
            }
            dialog.save_file().map(|p| vec![p])
        }
    };

    match paths {
        Some(ref selected) if selected.is_empty() => {
            warn!(?request.dialog_type, "dialog returned an empty selection");
            None
        }
        None => {
            debug!(?request.dialog_type, "dialog cancelled");
            None
        }
        some => some,
    }
}

/// Shows an OK/Cancel confirmation box. Returns `true` when confirmed.
pub fn confirm(title: &str, message: &str) -> bool {
    let result = rfd::MessageDialog::new()
        .set_title(title)
        .set_description(message)
        .set_level(rfd::MessageLevel::Info)
        .set_buttons(rfd::MessageButtons::OkCancel)
        .show();
    matches!(result, rfd::MessageDialogResult::Ok)
}
