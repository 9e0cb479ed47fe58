mod file_repository;
mod traits;

pub use file_repository::FileRepository;
pub use traits::AddressBookRepository;
