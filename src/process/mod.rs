mod process_record;
mod process_state;
mod process_status;

pub use process_record::ProcessRecord;
pub use process_state::ProcessState;
pub use process_status::ProcessStatus;
