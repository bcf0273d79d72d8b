use std::fmt;

/// Keywords a report must contain, in the order they are checked and listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequiredField {
    Unit,
    Turnout,
    TotalScore,
    Status,
    Reporter,
}

impl RequiredField {
    /// Declared order. Missing fields are always reported in this order.
    pub const ALL: [RequiredField; 5] = [
        RequiredField::Unit,
        RequiredField::Turnout,
        RequiredField::TotalScore,
        RequiredField::Status,
        RequiredField::Reporter,
    ];

    /// The literal keyword searched for in report text.
    pub const fn keyword(self) -> &'static str {
        match self {
            RequiredField::Unit => "หน่วยที่",
            RequiredField::Turnout => "ผู้มาใช้สิทธิ์",
            RequiredField::TotalScore => "คะแนนรวม",
            RequiredField::Status => "สถานการณ์",
            RequiredField::Reporter => "ผู้รายงาน",
        }
    }

    /// Short English description, used in logs.
    pub const fn description(self) -> &'static str {
        match self {
            RequiredField::Unit => "polling unit",
            RequiredField::Turnout => "turnout count",
            RequiredField::TotalScore => "total score",
            RequiredField::Status => "situation status",
            RequiredField::Reporter => "reporter name",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
