pub mod assignment;
pub mod booth;
pub mod id;
pub mod officer;
pub mod phone;
pub mod stats;
pub mod voter;

pub use assignment::{Assignment, AssignmentSpec};
pub use booth::{Booth, BoothPatch, BoothSpec};
pub use id::Id;
pub use officer::{Officer, OfficerPatch, OfficerSpec};
pub use phone::Phone;
pub use stats::DashboardStats;
pub use voter::{Gender, NationalId, Voter, VoterPatch, VoterSpec, VoterStatus};
