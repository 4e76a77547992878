//! 首页：四个快捷入口

use crate::flows::Destination;

/// 首页按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeAction {
    pub label: &'static str,
    pub destination: Destination,
}

pub const HOME_ACTIONS: [HomeAction; 4] = [
    HomeAction {
        label: "Start Learning",
        destination: Destination::Learn,
    },
    HomeAction {
        label: "Add Words",
        destination: Destination::Add,
    },
    HomeAction {
        label: "Practice",
        destination: Destination::Practice,
    },
    HomeAction {
        label: "My Profile",
        destination: Destination::Profile,
    },
];

/// 按 1 开始的序号查找首页按钮
pub fn action(number: usize) -> Option<HomeAction> {
    number.checked_sub(1).and_then(|i| HOME_ACTIONS.get(i)).copied()
}
