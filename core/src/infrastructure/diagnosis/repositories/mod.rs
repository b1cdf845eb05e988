pub mod file_diagnosis_repository;
pub mod in_memory_submission_repository;

pub use file_diagnosis_repository::FileDiagnosisRepository;
pub use in_memory_submission_repository::InMemorySubmissionRepository;
