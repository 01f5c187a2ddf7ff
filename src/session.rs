//! Editing session: the live document, its backing file and modified flag.
//!
//! The session drives the RTF reader and writer against the file system.
//! Everything interactive (file pickers, the "save changes?" question and
//! warning boxes) goes through a [`Prompter`], so a GUI, a terminal front-end
//! or a test script can stand behind it.
//!
//! Operations that can fail return `false` after surfacing a warning; the
//! session is left as it was before the call.

use crate::common::Error;
use crate::rtf::{self, Attribute, DecodeOptions, Document, TextRange};
use std::path::{Path, PathBuf};

/// Warning shown when a file cannot be read.
pub const OPEN_FAILED: &str = "Could not open file";
/// Warning shown when a file does not carry the RTF signature.
pub const INVALID_FORMAT: &str = "Invalid RTF file format";
/// Warning shown when a file cannot be written.
pub const SAVE_FAILED: &str = "Could not save file";

/// Answer to the "the document has been modified" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    /// Save, then continue
    Save,
    /// Continue without saving
    Discard,
    /// Abort the pending action
    Cancel,
}

/// The interactive collaborator of a [`Session`].
pub trait Prompter {
    /// Ask for a file to open. `None` means cancelled.
    fn open_path(&mut self) -> Option<PathBuf>;

    /// Ask for a destination to save to. `None` means cancelled.
    fn save_path(&mut self) -> Option<PathBuf>;

    /// Ask whether unsaved changes should be saved.
    fn confirm_save(&mut self) -> SaveChoice;

    /// Show a blocking warning.
    fn warn(&mut self, message: &str);
}

/// Character format commands, as bound to the Format menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCommand {
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
}

impl FormatCommand {
    /// The attribute this command switches.
    pub const fn attribute(self) -> Attribute {
        match self {
            FormatCommand::ToggleBold => Attribute::Bold,
            FormatCommand::ToggleItalic => Attribute::Italic,
            FormatCommand::ToggleUnderline => Attribute::Underline,
        }
    }
}

/// An editing session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    document: Document,
    current_file: Option<PathBuf>,
    modified: bool,
    options: DecodeOptions,
}

impl Session {
    /// Start with an empty, unmodified document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an empty document, decoding files with `options`.
    pub fn with_options(options: DecodeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The live document.
    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The file the document was last opened from or saved to.
    #[inline]
    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Whether the document changed since it was last opened or saved.
    #[inline]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Decoder options used when opening files.
    #[inline]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Mutate the document. The session is marked modified.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut Document) -> R) -> R {
        self.modified = true;
        f(&mut self.document)
    }

    /// Run a format command: set or clear its attribute on `range`.
    pub fn apply(&mut self, command: FormatCommand, range: TextRange, enabled: bool) {
        self.edit(|doc| doc.set_attribute(range, command.attribute(), enabled));
    }

    /// Replace the document with an empty one, after the unsaved-changes
    /// guard.
    pub fn new_file(&mut self, prompter: &mut dyn Prompter) -> bool {
        if !self.maybe_save(prompter) {
            return false;
        }
        self.document = Document::new();
        self.current_file = None;
        self.modified = false;
        true
    }

    /// Open a file chosen through the prompter, after the unsaved-changes
    /// guard.
    ///
    /// On any failure a warning is shown and the session is left untouched.
    pub fn open_file(&mut self, prompter: &mut dyn Prompter) -> bool {
        if !self.maybe_save(prompter) {
            return false;
        }
        let Some(path) = prompter.open_path() else {
            return false;
        };

        match self.open(&path) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("opening {} failed: {err}", path.display());
                let message = match err {
                    Error::Io(_) => OPEN_FAILED.to_string(),
                    Error::InvalidFormat(_) => INVALID_FORMAT.to_string(),
                    other => other.to_string(),
                };
                prompter.warn(&message);
                false
            },
        }
    }

    /// Open `path` without prompting.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> crate::common::Result<()> {
        let path = path.as_ref();
        self.document = rtf::load(path, &self.options)?;
        self.current_file = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Save to the known file, or ask for one when there is none.
    pub fn save_file(&mut self, prompter: &mut dyn Prompter) -> bool {
        match self.current_file.clone() {
            Some(path) => self.save_to(path, prompter),
            None => self.save_as_file(prompter),
        }
    }

    /// Ask for a destination and save there. Returns `false` when cancelled.
    pub fn save_as_file(&mut self, prompter: &mut dyn Prompter) -> bool {
        match prompter.save_path() {
            Some(path) => self.save_to(path, prompter),
            None => false,
        }
    }

    /// Unsaved-changes guard for close, new and open.
    ///
    /// Returns `true` when the pending action may proceed.
    pub fn maybe_save(&mut self, prompter: &mut dyn Prompter) -> bool {
        if !self.modified {
            return true;
        }
        match prompter.confirm_save() {
            SaveChoice::Save => self.save_file(prompter),
            SaveChoice::Discard => true,
            SaveChoice::Cancel => false,
        }
    }

    fn save_to(&mut self, path: PathBuf, prompter: &mut dyn Prompter) -> bool {
        match rtf::save(&self.document, &path) {
            Ok(()) => {
                self.current_file = Some(path);
                self.modified = false;
                true
            },
            Err(err) => {
                log::warn!("saving {} failed: {err}", path.display());
                prompter.warn(SAVE_FAILED);
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtf::{Paragraph, Style};
    use std::collections::VecDeque;
    use tempfile::tempdir;

    /// Prompter answering from queues and recording warnings.
    #[derive(Default)]
    struct Script {
        open_paths: VecDeque<Option<PathBuf>>,
        save_paths: VecDeque<Option<PathBuf>>,
        choices: VecDeque<SaveChoice>,
        warnings: Vec<String>,
        save_prompts: usize,
    }

    impl Prompter for Script {
        fn open_path(&mut self) -> Option<PathBuf> {
            self.open_paths.pop_front().flatten()
        }

        fn save_path(&mut self) -> Option<PathBuf> {
            self.save_prompts += 1;
            self.save_paths.pop_front().flatten()
        }

        fn confirm_save(&mut self) -> SaveChoice {
            self.choices.pop_front().unwrap_or(SaveChoice::Cancel)
        }

        fn warn(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }
    }

    fn session() -> Session {
        Session::with_options(DecodeOptions::with_encoding(encoding_rs::UTF_8))
    }

    fn modified_session() -> Session {
        let mut session = session();
        session.edit(|doc| doc.last_paragraph_mut().push(rtf::Run::plain("draft")));
        session
    }

    #[test]
    fn test_new_session_is_clean() {
        let session = session();
        assert!(!session.is_modified());
        assert!(session.current_file().is_none());
        assert!(session.document().is_empty());
    }

    #[test]
    fn test_save_as_cancelled_does_not_write() {
        let mut session = modified_session();
        let mut script = Script::default();
        script.save_paths.push_back(None);

        assert!(!session.save_as_file(&mut script));
        assert!(session.is_modified());
        assert!(script.warnings.is_empty());
    }

    #[test]
    fn test_save_without_path_delegates_to_save_as() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.rtf");
        let mut session = modified_session();
        let mut script = Script::default();
        script.save_paths.push_back(Some(path.clone()));

        assert!(session.save_file(&mut script));
        assert_eq!(script.save_prompts, 1);
        assert!(!session.is_modified());
        assert_eq!(session.current_file(), Some(path.as_path()));

        // The known path is reused without asking again.
        session.edit(|doc| doc.push_paragraph(Paragraph::plain("more")));
        assert!(session.save_file(&mut script));
        assert_eq!(script.save_prompts, 1);
        assert_eq!(rtf::load(&path, session.options()).unwrap().text(), "draft\nmore");
    }

    #[test]
    fn test_failed_save_keeps_modified_flag() {
        let dir = tempdir().unwrap();
        let mut session = modified_session();
        let mut script = Script::default();
        script.save_paths.push_back(Some(dir.path().join("missing").join("a.rtf")));

        assert!(!session.save_file(&mut script));
        assert!(session.is_modified());
        assert!(session.current_file().is_none());
        assert_eq!(script.warnings, vec![SAVE_FAILED]);
    }

    #[test]
    fn test_maybe_save_unmodified_proceeds() {
        let mut session = session();
        let mut script = Script::default();
        assert!(session.maybe_save(&mut script));
        assert!(script.choices.is_empty());
    }

    #[test]
    fn test_maybe_save_choices() {
        let mut session = modified_session();
        let mut script = Script::default();
        script.choices.extend([SaveChoice::Cancel, SaveChoice::Discard]);

        assert!(!session.maybe_save(&mut script));
        assert!(session.maybe_save(&mut script));
        assert!(session.is_modified());
    }

    #[test]
    fn test_maybe_save_save_cancelled_aborts() {
        let mut session = modified_session();
        let mut script = Script::default();
        script.choices.push_back(SaveChoice::Save);
        script.save_paths.push_back(None);

        assert!(!session.maybe_save(&mut script));
    }

    #[test]
    fn test_new_file_guarded() {
        let mut session = modified_session();
        let mut script = Script::default();
        script.choices.extend([SaveChoice::Cancel, SaveChoice::Discard]);

        assert!(!session.new_file(&mut script));
        assert!(!session.document().is_empty());

        assert!(session.new_file(&mut script));
        assert!(session.document().is_empty());
        assert!(!session.is_modified());
    }

    #[test]
    fn test_open_file_replaces_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.rtf");
        rtf::save(&Document::from_plain_text("one\ntwo"), &path).unwrap();

        let mut session = session();
        let mut script = Script::default();
        script.open_paths.push_back(Some(path.clone()));

        assert!(session.open_file(&mut script));
        assert_eq!(session.document().text(), "one\ntwo");
        assert_eq!(session.current_file(), Some(path.as_path()));
        assert!(!session.is_modified());
    }

    #[test]
    fn test_open_invalid_file_leaves_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.rtf");
        std::fs::write(&path, "not rtf").unwrap();

        let mut session = modified_session();
        let before = session.document().clone();
        let mut script = Script::default();
        script.choices.push_back(SaveChoice::Discard);
        script.open_paths.push_back(Some(path));

        assert!(!session.open_file(&mut script));
        assert_eq!(script.warnings, vec![INVALID_FORMAT]);
        assert_eq!(session.document(), &before);
        assert!(session.is_modified());
        assert!(session.current_file().is_none());
    }

    #[test]
    fn test_open_missing_file_warns() {
        let dir = tempdir().unwrap();
        let mut session = session();
        let mut script = Script::default();
        script.open_paths.push_back(Some(dir.path().join("nope.rtf")));

        assert!(!session.open_file(&mut script));
        assert_eq!(script.warnings, vec![OPEN_FAILED]);
    }

    #[test]
    fn test_open_cancelled() {
        let mut session = session();
        let mut script = Script::default();
        script.open_paths.push_back(None);
        assert!(!session.open_file(&mut script));
        assert!(script.warnings.is_empty());
    }

    #[test]
    fn test_format_command_marks_modified() {
        let mut session = session();
        session.edit(|doc| doc.last_paragraph_mut().push(rtf::Run::plain("Hello")));
        session.apply(FormatCommand::ToggleBold, TextRange::within(0, 0..2), true);

        let runs = session.document().paragraphs()[0].runs();
        assert_eq!(runs[0].text(), "He");
        assert_eq!(runs[0].style(), Style::BOLD);
        assert!(session.is_modified());
        assert_eq!(FormatCommand::ToggleUnderline.attribute(), Attribute::Underline);
    }
}
