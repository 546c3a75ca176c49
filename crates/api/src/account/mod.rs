mod get_session;
mod login;
mod logout;
mod signup;
mod update_profile;

pub use get_session::{current_session, GetSessionUseCase};
pub use login::{login, LoginUseCase};
pub use logout::{logout, LogoutUseCase};
pub use signup::{signup, SignupUseCase};
pub use update_profile::{update_profile, UpdateProfileUseCase};
