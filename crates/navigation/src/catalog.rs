//! The static dashboard catalog.

use serde::Serialize;

/// A single dashboard entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
    pub description: &'static str,
    /// Per-task role list. Carried for hosts that render it; visibility
    /// never consults it.
    pub roles: Option<&'static [&'static str]>,
}

/// A titled group of tasks gated on a role list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub roles: &'static [&'static str],
    pub tasks: &'static [Task],
}

const fn task(
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    route: &'static str,
    description: &'static str,
) -> Task {
    Task {
        id,
        title,
        icon,
        route,
        description,
        roles: None,
    }
}

/// Every category, in display order.
pub static CATALOG: [Category; 6] = [
    Category {
        id: "administration",
        title: "🏛️ Administration & Management",
        color: "red",
        description: "Core administrative functions and school management",
        roles: &["superuser", "admin"],
        tasks: &[
            task("addStudent", "Add New Student", "👨‍🎓", "AddStudentScreen", "Register new students to the school"),
            task("manageStudents", "Manage Students", "👥", "StudentsScreen", "View and edit student information"),
            task("addClass", "Add New Class", "🏫", "AddClassScreen", "Create new classes and sections"),
            task("manageClasses", "Manage Classes", "📚", "ClassesScreen", "View and edit class information"),
            task("addStaff", "Add New Staff", "👨‍🏫", "AddStaffScreen", "Add teachers and staff members"),
            task("manageStaff", "Manage Staff", "👨‍💼", "StaffScreen", "View and edit staff information"),
        ],
    },
    Category {
        id: "academic",
        title: "📚 Academic Operations",
        color: "green",
        description: "Teaching, learning, and classroom management",
        roles: &["superuser", "admin", "teacher"],
        tasks: &[
            task("attendance", "Take Attendance", "✅", "AttendanceScreen", "Mark student attendance"),
            task("exams", "Manage Exams", "📝", "ExamsScreen", "Create and manage examinations"),
            task("syllabus", "Syllabus Management", "📖", "SyllabusScreen", "Manage course syllabus"),
            task("timetable", "Time Table", "🕐", "TimetableScreen", "Create and view timetables"),
        ],
    },
    Category {
        id: "financial",
        title: "💰 Financial Operations",
        color: "orange",
        description: "Fee management, salaries, and financial reporting",
        roles: &["superuser", "admin", "accountant"],
        tasks: &[
            task("feeManagement", "Fee Management", "💳", "FeesScreen", "Manage student fees and payments"),
            task("salaryManagement", "Salary Management", "💰", "SalaryScreen", "Process staff salaries"),
            task("financialReports", "Financial Reports", "📊", "FinancialReportsScreen", "View financial analytics"),
        ],
    },
    Category {
        id: "reports",
        title: "📊 Reports & Analytics",
        color: "pink",
        description: "Data export, analytics, and reporting tools",
        roles: &["superuser", "admin", "teacher", "accountant"],
        tasks: &[
            task("studentReports", "Student Reports", "📈", "ReportsScreen", "Student performance analytics"),
            task("attendanceReports", "Attendance Reports", "📋", "AttendanceReportsScreen", "Attendance analytics and reports"),
            task("downloadRecords", "Download Records", "📥", "DownloadScreen", "Export and download data"),
        ],
    },
    Category {
        id: "communication",
        title: "📱 Communication & Media",
        color: "teal",
        description: "Social media management and communication tools",
        roles: &["superuser", "admin", "teacher", "accountant"],
        tasks: &[
            task("socialMedia", "Social Media", "📱", "SocialMediaScreen", "Manage school social media"),
            task("notifications", "Notifications", "🔔", "NotificationsScreen", "Send notifications to users"),
        ],
    },
    Category {
        id: "personal",
        title: "👤 Personal & Settings",
        color: "blue",
        description: "User profile and personal settings",
        roles: &["superuser", "admin", "teacher", "accountant", "student", "parent"],
        tasks: &[
            task("profile", "My Profile", "👤", "ProfileScreen", "View and update personal information"),
            task("settings", "Settings", "⚙️", "SettingsScreen", "App settings and preferences"),
        ],
    },
];

/// Configured role → category-id grants.
///
/// This table is informational: category visibility is decided by each
/// category's own role list, not by these grants. `superuser` is granted the
/// wildcard `all`.
pub fn category_grants(role: &str) -> &'static [&'static str] {
    match role {
        "superuser" => &["all"],
        "admin" => &["administration", "academic", "financial", "reports", "communication", "personal"],
        "teacher" => &["academic", "reports", "communication", "personal"],
        "accountant" => &["financial", "reports", "personal"],
        "student" | "parent" => &["personal"],
        _ => &[],
    }
}
