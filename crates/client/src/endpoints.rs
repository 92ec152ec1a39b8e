//! REST paths, relative to the configured base URL.

pub mod auth {
    pub const LOGIN: &str = "/v1/auth/login";
    pub const REGISTER: &str = "/v1/auth/register";
    pub const VERIFY: &str = "/v1/auth/verify";
    pub const FORGOT_PASSWORD: &str = "/v1/auth/forgot-password";
    pub const RESET_PASSWORD: &str = "/v1/auth/reset-password";
}

pub mod user {
    pub const PROFILE: &str = "/v1/userroute/getprofile";
    pub const ROLE_INFO: &str = "/v1/userroute/getuserroleinfo";
    pub const UPDATE_ADMIN_CREDENTIALS: &str = "/v1/schoolroute/updateadmincredentials";
    pub const UPDATE_SUPERUSER_CREDENTIALS: &str = "/v1/schoolroute/updatesuperusercredentials";
    pub const PUSH_TOKENS: &str = "/v1/userroute/storepushtokens";
}

pub mod class {
    pub const GET_AVAILABLE_CLASSES: &str = "/v1/classroute/getavailableclasses";
    pub const GET_CLASS: &str = "/v1/classroute/getclass";
    pub const GET_STUDENT_LIST: &str = "/v1/classroute/getstudentlist";
    pub const GET_PARTIAL_STUDENT_LIST: &str = "/v1/classroute/getpartialstudentlist";
    pub const ADD_NEW_CLASS: &str = "/v1/classroute/addnewclass";
    pub const UPDATE_CLASS: &str = "/v1/classroute/updateclass";
    pub const DELETE_CLASS: &str = "/v1/classroute/deleteclass";
    pub const GET_ALL_CLASSES_ATTENDANCE: &str = "/v1/classroute/getallclassesattendacefordate";
}

pub mod student {
    pub const ADD_NEW_STUDENT: &str = "/v1/studentroute/addnewstudent";
    pub const UPDATE_STUDENT: &str = "/v1/studentroute/updatestudent";
    pub const DELETE_STUDENT: &str = "/v1/studentroute/deletestudent";
    pub const GET_STUDENT_DETAILS: &str = "/v1/studentroute/getstudentdetails";
    pub const UPDATE_DAILY_REPORT: &str = "/v1/studentroute/updatedailyreport";
    pub const UPDATE_TEST_REPORT: &str = "/v1/studentroute/updatetestreport";
    pub const GET_ATTENDANCE: &str = "/v1/studentroute/getattendance";
    pub const UPDATE_ATTENDANCE: &str = "/v1/studentroute/updateattendance";
}

pub mod staff {
    pub const ADD_NEW_STAFF: &str = "/v1/staffroute/addnewstaff";
    pub const ADD_NEW_TEACHER: &str = "/v1/staffroute/addnewteacher";
    pub const GET_ALL_TEACHERS: &str = "/v1/staffroute/getallteachers";
    pub const GET_ALL_STAFF: &str = "/v1/staffroute/getallstaff";
    pub const UPDATE_STAFF: &str = "/v1/staffroute/updatestaff";
    pub const DELETE_STAFF: &str = "/v1/staffroute/deletestaff";
    pub const GET_STAFF_DETAILS: &str = "/v1/staffroute/getstaffdetails";
}

pub mod fee {
    pub const GET_FEE_STATUS: &str = "/v1/feeroute/getstudentfeestatus";
    pub const PAY_FEE: &str = "/v1/feeroute/newFeeStatus";
    pub const GET_FEE_SUMMARY: &str = "/v1/feeroute/getfeesummary";
    pub const SET_FEE_FOR_CLASS: &str = "/v1/feeroute/setfeeforclass";
    pub const GET_FEE_DETAILS_OF_CLASS: &str = "/v1/feeroute/getfeedetailsofclass";
    pub const UPDATE_REQUIRED_FEE: &str = "/v1/feeroute/updaterequiredfeeforstudent";
    pub const PROCESS_FLEXIBLE_PAYMENT: &str = "/v1/feeroute/processflexiblepayment";
    pub const GET_PARENT_FEE_SUMMARY: &str = "/v1/feeroute/getparentfeesummary";
    pub const GET_UNIFIED_FEE_DATA: &str = "/v1/feeroute/getunifiedfeedata";
}

pub mod salary {
    pub const GET_SALARY_STATUS: &str = "/v1/salaryroute/getsalarystatus";
    pub const UPDATE_SALARY: &str = "/v1/salaryroute/updatesalary";
    pub const PROCESS_SALARY: &str = "/v1/salaryroute/processsalary";
}

pub mod academic_session {
    pub const GET_ALL: &str = "/v1/academicsessionroute/getallacademicsessions";
    pub const GET_CURRENT: &str = "/v1/academicsessionroute/current";
    pub const CREATE: &str = "/v1/academicsessionroute/createacademicsession";
    pub const UPDATE: &str = "/v1/academicsessionroute/updateacademicsession";
    pub const DELETE: &str = "/v1/academicsessionroute/deleteacademicsession";
    pub const ACTIVATE: &str = "/v1/academicsessionroute/activate";
}

pub mod syllabus {
    pub const GET_SYLLABUS: &str = "/v1/syllabusroute/getsyllabus";
    pub const ADD_NEW_SYLLABUS: &str = "/v1/syllabusroute/addnewsyllabus";
    pub const UPDATE_SYLLABUS: &str = "/v1/syllabusroute/updatesyllabus";
    pub const CREATE_FROM_MASTER: &str = "/v1/syllabusroute/createnewsyllabusfrommaster";
    pub const RESET_FROM_MASTER: &str = "/v1/syllabusroute/resetsyllabusfrommaster";
    pub const GET_COMBINED_COMPLETION: &str =
        "/v1/syllabusroute/getcombinedsyllabuscompletionforallclasses";
}

pub mod parent {
    pub const GET_ALL_PARENTS: &str = "/v1/parentroute/getallparents";
    pub const GET_PARENT_DETAILS: &str = "/v1/parentroute/getparentdetails";
    pub const UPDATE_PARENT: &str = "/v1/parentroute/updateparent";
    pub const SEARCH_PARENTS: &str = "/v1/parentroute/searchparents";
}

pub mod exam {
    pub const CREATE_EXAM: &str = "/v1/examroute/createexam";
    pub const GET_EXAMS: &str = "/v1/examroute/getexams";
    pub const UPDATE_EXAM: &str = "/v1/examroute/updateexam";
    pub const DELETE_EXAM: &str = "/v1/examroute/deleteexam";
}

/// Post CRUD shares one path; the method tells them apart.
pub mod social_media {
    pub const POSTS: &str = "/v1/socialmedia/posts";
    pub const LIKE_POST: &str = "/v1/socialmedia/posts/like";
    pub const COMMENT_POST: &str = "/v1/socialmedia/posts/comment";
    pub const GET_CHAT_MESSAGES: &str = "/v1/socialmedia/chat/messages";
    pub const SEND_MESSAGE: &str = "/v1/socialmedia/chat/send";
}

pub mod audit {
    pub const GET_LOGS: &str = "/v1/audit/logs";
    pub const GET_STATISTICS: &str = "/v1/audit/statistics";
    pub const GET_FILTERS: &str = "/v1/audit/filters";
    pub const EXPORT_LOGS: &str = "/v1/audit/export";
}

pub mod certificate {
    pub const GENERATE: &str = "/v1/certificateroute/generate";
    pub const GET_TEMPLATES: &str = "/v1/certificateroute/templates";
}

pub mod document_template {
    pub const GET_ALL: &str = "/v1/documenttemplatesroute/getalltemplates";
    pub const CREATE: &str = "/v1/documenttemplatesroute/createtemplate";
    pub const UPDATE: &str = "/v1/documenttemplatesroute/updatetemplate";
    pub const DELETE: &str = "/v1/documenttemplatesroute/deletetemplate";
}

pub mod excel_template {
    pub const GET_ALL: &str = "/v1/exceltemplatesroute/getalltemplates";
    pub const UPLOAD: &str = "/v1/exceltemplatesroute/upload";
    pub const DOWNLOAD: &str = "/v1/exceltemplatesroute/download";
}

pub mod school {
    pub const GET_SCHOOL_INFO: &str = "/v1/schoolroute/getschoolinfo";
    pub const UPDATE_SCHOOL_INFO: &str = "/v1/schoolroute/updateschoolinfo";
    pub const REGISTER_SCHOOL: &str = "/v1/schoolroute/registerschool";
    pub const APPROVE_SCHOOL: &str = "/v1/schoolroute/approveschool";
}
