pub use self::{play::PlayScreen, self_test::SelfTestScreen};

mod play;
