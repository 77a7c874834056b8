/// Use cases module containing application business logic orchestration
mod export_sboms;

pub use export_sboms::ExportSbomsUseCase;
