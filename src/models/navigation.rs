/// Entries of the admin back-office sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminMenuItem {
    Bookings,
    Content,
    Quests,
    Employees,
}

impl AdminMenuItem {
    pub const ALL: [AdminMenuItem; 4] = [
        AdminMenuItem::Bookings,
        AdminMenuItem::Content,
        AdminMenuItem::Quests,
        AdminMenuItem::Employees,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminMenuItem::Bookings => "Bookings",
            AdminMenuItem::Content => "Content",
            AdminMenuItem::Quests => "Quests",
            AdminMenuItem::Employees => "Employees",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AdminMenuItem::Bookings => "/admin/bookings",
            AdminMenuItem::Content => "/admin/content",
            AdminMenuItem::Quests => "/admin/quests",
            AdminMenuItem::Employees => "/admin/employees",
        }
    }
}
