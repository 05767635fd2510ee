//! Scaffold Service - main application orchestrator.
//!
//! Validates a [`ComponentRequest`], then runs the ordered write sequence:
//! 1. Create the component directory
//! 2. Look up the template
//! 3. Render and write the component file
//! 4. Render and write the index file
//!
//! Every failure after step 1 removes the component directory again, so a
//! run leaves either both files or nothing.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{
            CodeFormatter, Filesystem, ProgressReporter, ScaffoldEvent, SilentProgress,
            TemplateStore,
        },
        services::Renderer,
    },
    domain::{ComponentRequest, DomainValidator as validator, FormatRules, ScaffoldResult},
    error::NcompResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    renderer: Renderer,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters and the format
    /// rules from the effective configuration.
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        formatter: Box<dyn CodeFormatter>,
        rules: FormatRules,
    ) -> Self {
        Self {
            store,
            filesystem,
            renderer: Renderer::new(formatter, rules),
        }
    }

    /// Scaffold a component without progress output.
    pub fn scaffold(&self, request: &ComponentRequest) -> NcompResult<ScaffoldResult> {
        self.scaffold_with_progress(request, &SilentProgress)
    }

    /// Scaffold a component, reporting each completed step.
    #[instrument(
        skip_all,
        fields(
            component = %request.name(),
            kind = %request.component_type(),
            flavor = %request.flavor(),
            dir = %request.target_directory().display()
        )
    )]
    pub fn scaffold_with_progress(
        &self,
        request: &ComponentRequest,
        progress: &dyn ProgressReporter,
    ) -> NcompResult<ScaffoldResult> {
        // 1. Validate: nothing on disk changes before this passes
        self.validate(request)?;

        // 2. Create the directory; the guard removes it unless committed
        let directory = request.component_dir();
        let guard = DirectoryGuard::create(self.filesystem.as_ref(), directory.clone())?;
        info!(path = %directory.display(), "Component directory created");
        progress.report(&ScaffoldEvent::DirectoryCreated(directory.clone()));

        // 3. Template lookup
        let template = self
            .store
            .lookup(request.component_type(), request.flavor())?;
        validator::validate_template(&template, request.component_type(), request.flavor())?;

        // 4. Component file
        let component_file = request.component_file();
        let content = self.renderer.render(&template, request.name())?;
        self.filesystem.write_file(&component_file, &content)?;
        debug!(path = %component_file.display(), bytes = content.len(), "Component written");
        progress.report(&ScaffoldEvent::ComponentWritten(component_file.clone()));

        // 5. Index file
        let index_file = request.index_file();
        let index = self
            .renderer
            .render_index(request.name(), request.flavor())?;
        self.filesystem.write_file(&index_file, &index)?;
        debug!(path = %index_file.display(), "Index written");
        progress.report(&ScaffoldEvent::IndexWritten(index_file.clone()));

        guard.commit();

        let result = ScaffoldResult {
            directory,
            component_file,
            index_file,
        };
        info!("Scaffold completed successfully");
        progress.report(&ScaffoldEvent::Completed(result.clone()));
        Ok(result)
    }

    /// Ordered checks; the first failure wins.
    fn validate(&self, request: &ComponentRequest) -> NcompResult<()> {
        self.renderer.rules().validate()?;
        validator::validate_request(request)?;

        let parent = request.target_directory();
        if !self.filesystem.exists(parent) {
            return Err(ApplicationError::MissingParentDirectory {
                path: parent.to_path_buf(),
            }
            .into());
        }

        let directory = request.component_dir();
        if self.filesystem.exists(&directory) {
            return Err(ApplicationError::AlreadyExists { path: directory }.into());
        }

        Ok(())
    }
}

// -------------------------------------------------------------------------
// Cleanup guard
// -------------------------------------------------------------------------

/// Owns a freshly created directory until [`DirectoryGuard::commit`].
///
/// Dropping an uncommitted guard removes the directory and its contents.
struct DirectoryGuard<'a> {
    filesystem: &'a dyn Filesystem,
    path: PathBuf,
    armed: bool,
}

impl<'a> DirectoryGuard<'a> {
    fn create(filesystem: &'a dyn Filesystem, path: PathBuf) -> NcompResult<Self> {
        filesystem.create_dir(&path)?;
        Ok(Self {
            filesystem,
            path,
            armed: true,
        })
    }

    fn commit(mut self) {
        self.armed = false;
    }
}

impl Drop for DirectoryGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!(path = %self.path.display(), "Scaffold failed, removing component directory");
            rollback(self.filesystem, &self.path);
        }
    }
}

/// Best-effort rollback; a failure here must not mask the original error.
fn rollback(filesystem: &dyn Filesystem, root: &Path) {
    if let Err(e) = filesystem.remove_dir_all(root) {
        warn!(
            error = %e,
            path = %root.display(),
            "Rollback failed"
        );
    } else {
        info!("Rollback successful");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use mockall::Sequence;

    use super::*;
    use crate::application::ports::output::{
        MockCodeFormatter, MockFilesystem, MockTemplateStore,
    };
    use crate::domain::{ComponentType, DomainError, LanguageFlavor, Template, TemplateKey};
    use crate::error::NcompError;

    const SOURCE: &str = "export function COMPONENT_NAME() {\n  return null;\n}\n";

    fn store() -> MockTemplateStore {
        let mut store = MockTemplateStore::new();
        store
            .expect_lookup()
            .returning(|t, f| Ok(Template::new(TemplateKey::new(t, f), SOURCE)));
        store
    }

    fn formatter() -> MockCodeFormatter {
        let mut formatter = MockCodeFormatter::new();
        formatter
            .expect_format()
            .returning(|text, _| Ok(text.to_string()));
        formatter
    }

    fn service(filesystem: MockFilesystem) -> ScaffoldService {
        ScaffoldService::new(
            Box::new(store()),
            Box::new(filesystem),
            Box::new(formatter()),
            FormatRules::default(),
        )
    }

    fn widget() -> ComponentRequest {
        ComponentRequest::new(
            "Widget",
            "src",
            ComponentType::Functional,
            LanguageFlavor::Script,
        )
    }

    /// Parent `src` exists, `src/Widget` does not.
    fn expect_clean_target(filesystem: &mut MockFilesystem) {
        filesystem
            .expect_exists()
            .withf(|p| p.to_str() == Some("src"))
            .return_const(true);
        filesystem
            .expect_exists()
            .withf(|p| p.to_str() == Some("src/Widget"))
            .return_const(false);
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<ScaffoldEvent>>);

    impl ProgressReporter for Recorder {
        fn report(&self, event: &ScaffoldEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn writes_directory_component_then_index() {
        let mut filesystem = MockFilesystem::new();
        expect_clean_target(&mut filesystem);

        let mut seq = Sequence::new();
        filesystem
            .expect_create_dir()
            .withf(|p| p.to_str() == Some("src/Widget"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        filesystem
            .expect_write_file()
            .withf(|p, content| {
                p.to_str() == Some("src/Widget/Widget.js") && content.contains("function Widget()")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        filesystem
            .expect_write_file()
            .withf(|p, content| {
                p.to_str() == Some("src/Widget/index.js")
                    && content.contains("export { Widget } from './Widget';")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        filesystem.expect_remove_dir_all().never();

        let recorder = Recorder::default();
        let result = service(filesystem)
            .scaffold_with_progress(&widget(), &recorder)
            .unwrap();

        assert_eq!(result.directory, PathBuf::from("src/Widget"));
        assert_eq!(result.component_file, PathBuf::from("src/Widget/Widget.js"));
        assert_eq!(result.index_file, PathBuf::from("src/Widget/index.js"));

        let events = recorder.0.into_inner();
        assert_eq!(
            events,
            vec![
                ScaffoldEvent::DirectoryCreated(PathBuf::from("src/Widget")),
                ScaffoldEvent::ComponentWritten(PathBuf::from("src/Widget/Widget.js")),
                ScaffoldEvent::IndexWritten(PathBuf::from("src/Widget/index.js")),
                ScaffoldEvent::Completed(result),
            ]
        );
    }

    #[test]
    fn missing_name_touches_nothing() {
        let filesystem = MockFilesystem::new();
        let request = ComponentRequest::new(
            "",
            "src",
            ComponentType::Class,
            LanguageFlavor::Script,
        );

        let err = service(filesystem).scaffold(&request).unwrap_err();
        assert_eq!(err, NcompError::Domain(DomainError::MissingName));
    }

    #[test]
    fn unusable_format_rules_touch_nothing() {
        let service = ScaffoldService::new(
            Box::new(store()),
            Box::new(MockFilesystem::new()),
            Box::new(formatter()),
            FormatRules {
                indent_width: usize::MAX,
                ..FormatRules::default()
            },
        );

        let err = service.scaffold(&widget()).unwrap_err();
        assert!(matches!(err, NcompError::Configuration { .. }));
    }

    #[test]
    fn unsupported_combination_touches_nothing() {
        // No expectations: any filesystem call would panic.
        let filesystem = MockFilesystem::new();
        let request = ComponentRequest::new(
            "Card",
            "src",
            ComponentType::PureClass,
            LanguageFlavor::TypedScript,
        );

        let err = service(filesystem).scaffold(&request).unwrap_err();
        assert!(matches!(
            err,
            NcompError::Domain(DomainError::UnsupportedCombination { .. })
        ));
    }

    #[test]
    fn missing_parent_directory_is_reported() {
        let mut filesystem = MockFilesystem::new();
        filesystem.expect_exists().return_const(false);
        filesystem.expect_create_dir().never();

        let err = service(filesystem).scaffold(&widget()).unwrap_err();
        assert_eq!(
            err,
            NcompError::Application(ApplicationError::MissingParentDirectory {
                path: PathBuf::from("src"),
            })
        );
        assert!(err.is_expected());
    }

    #[test]
    fn existing_component_is_not_overwritten() {
        let mut filesystem = MockFilesystem::new();
        filesystem.expect_exists().return_const(true);
        filesystem.expect_create_dir().never();
        filesystem.expect_write_file().never();
        filesystem.expect_remove_dir_all().never();

        let err = service(filesystem).scaffold(&widget()).unwrap_err();
        assert_eq!(
            err,
            NcompError::Application(ApplicationError::AlreadyExists {
                path: PathBuf::from("src/Widget"),
            })
        );
    }

    #[test]
    fn component_write_failure_removes_directory() {
        let mut filesystem = MockFilesystem::new();
        expect_clean_target(&mut filesystem);
        filesystem.expect_create_dir().returning(|_| Ok(()));
        filesystem.expect_write_file().times(1).returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        filesystem
            .expect_remove_dir_all()
            .withf(|p| p.to_str() == Some("src/Widget"))
            .times(1)
            .returning(|_| Ok(()));

        let recorder = Recorder::default();
        let err = service(filesystem)
            .scaffold_with_progress(&widget(), &recorder)
            .unwrap_err();

        assert!(matches!(
            err,
            NcompError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert_eq!(
            recorder.0.into_inner(),
            vec![ScaffoldEvent::DirectoryCreated(PathBuf::from("src/Widget"))]
        );
    }

    #[test]
    fn index_write_failure_removes_component_too() {
        let mut filesystem = MockFilesystem::new();
        expect_clean_target(&mut filesystem);
        filesystem.expect_create_dir().returning(|_| Ok(()));
        filesystem
            .expect_write_file()
            .withf(|p, _| p.ends_with("Widget.js"))
            .returning(|_, _| Ok(()));
        filesystem
            .expect_write_file()
            .withf(|p, _| p.ends_with("index.js"))
            .returning(|p, _| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "read-only".into(),
                }
                .into())
            });
        filesystem
            .expect_remove_dir_all()
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(filesystem).scaffold(&widget()).is_err());
    }

    #[test]
    fn rollback_failure_keeps_original_error() {
        let mut filesystem = MockFilesystem::new();
        expect_clean_target(&mut filesystem);
        filesystem.expect_create_dir().returning(|_| Ok(()));
        filesystem.expect_write_file().returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        filesystem.expect_remove_dir_all().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "busy".into(),
            }
            .into())
        });

        let err = service(filesystem).scaffold(&widget()).unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn formatting_failure_removes_directory() {
        let mut filesystem = MockFilesystem::new();
        expect_clean_target(&mut filesystem);
        filesystem.expect_create_dir().returning(|_| Ok(()));
        filesystem.expect_write_file().never();
        filesystem
            .expect_remove_dir_all()
            .times(1)
            .returning(|_| Ok(()));

        let mut formatter = MockCodeFormatter::new();
        formatter.expect_format().returning(|_, _| {
            Err(ApplicationError::FormattingFailed {
                reason: "unbalanced braces".into(),
            }
            .into())
        });

        let service = ScaffoldService::new(
            Box::new(store()),
            Box::new(filesystem),
            Box::new(formatter),
            FormatRules::default(),
        );
        let err = service.scaffold(&widget()).unwrap_err();
        assert!(!err.is_expected());
    }

    #[test]
    fn missing_template_removes_directory() {
        let mut filesystem = MockFilesystem::new();
        expect_clean_target(&mut filesystem);
        filesystem.expect_create_dir().returning(|_| Ok(()));
        filesystem
            .expect_remove_dir_all()
            .times(1)
            .returning(|_| Ok(()));

        let mut store = MockTemplateStore::new();
        store.expect_lookup().returning(|t, f| {
            Err(DomainError::TemplateNotFound {
                component_type: t,
                flavor: f,
            }
            .into())
        });

        let service = ScaffoldService::new(
            Box::new(store),
            Box::new(filesystem),
            Box::new(formatter()),
            FormatRules::default(),
        );
        assert!(matches!(
            service.scaffold(&widget()),
            Err(NcompError::Domain(DomainError::TemplateNotFound { .. }))
        ));
    }
}
