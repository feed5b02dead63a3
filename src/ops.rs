//! Operation registry.
//!
//! Every API operation is one static [`Descriptor`] row: HTTP method, path
//! template, and the ordered body-field spec consumed by the body builder
//! in [`crate::media`]. The dispatch path in [`crate::http`] is shared by
//! all rows, so adding an operation means adding a row here and a thin
//! wrapper in the matching service module.

/// One operation of the remote API.
pub(crate) struct Descriptor {
    pub name: &'static str,
    pub method: &'static str,
    /// Path template; `{userId}`-style placeholders are substituted by
    /// [`resolve`].
    pub path: &'static str,
    pub fields: &'static [Field],
}

/// One body field of an operation, in wire order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Field {
    /// Plain text part, e.g. `userId`.
    Text(&'static str),
    /// Boolean toggle rendered as `"true"`/`"false"`.
    Flag(&'static str),
    /// Media slot. The name is the multipart file-part field used for
    /// local files; URL-delivered media becomes a `fileUrl` text field.
    Media(&'static str),
}

use Field::{Flag, Media, Text};

pub(crate) const GET_ALL_USERS: Descriptor = Descriptor {
    name: "GetAllUsers",
    method: "GET",
    path: "/users",
    fields: &[],
};

pub(crate) const CREATE_USER: Descriptor = Descriptor {
    name: "CreateUser",
    method: "POST",
    path: "/users",
    fields: &[],
};

pub(crate) const DELETE_USER: Descriptor = Descriptor {
    name: "DeleteUser",
    method: "DELETE",
    path: "/users/{userId}",
    fields: &[],
};

pub(crate) const CREATE_GROUP: Descriptor = Descriptor {
    name: "CreateGroup",
    method: "POST",
    path: "/groups",
    fields: &[Text("description")],
};

pub(crate) const ADD_USER_TO_GROUP: Descriptor = Descriptor {
    name: "AddUserToGroup",
    method: "PUT",
    path: "/groups/addUser",
    fields: &[Text("groupId"), Text("userId")],
};

pub(crate) const REMOVE_USER_FROM_GROUP: Descriptor = Descriptor {
    name: "RemoveUserFromGroup",
    method: "PUT",
    path: "/groups/removeUser",
    fields: &[Text("groupId"), Text("userId")],
};

pub(crate) const DELETE_GROUP: Descriptor = Descriptor {
    name: "DeleteGroup",
    method: "DELETE",
    path: "/groups/{groupId}",
    fields: &[],
};

pub(crate) const CREATE_VOICE_ENROLLMENT: Descriptor = Descriptor {
    name: "CreateVoiceEnrollment",
    method: "POST",
    path: "/enrollments",
    fields: &[Text("userId"), Text("contentLanguage"), Media("recording")],
};

pub(crate) const CREATE_VOICE_ENROLLMENT_BY_URL: Descriptor = Descriptor {
    name: "CreateVoiceEnrollmentByUrl",
    method: "POST",
    path: "/enrollments/byUrl",
    fields: &[Text("userId"), Text("contentLanguage"), Media("recording")],
};

pub(crate) const CREATE_VIDEO_ENROLLMENT: Descriptor = Descriptor {
    name: "CreateVideoEnrollment",
    method: "POST",
    path: "/enrollments/video",
    fields: &[
        Text("userId"),
        Text("contentLanguage"),
        Flag("doBlinkDetection"),
        Media("video"),
    ],
};

pub(crate) const CREATE_VIDEO_ENROLLMENT_BY_URL: Descriptor = Descriptor {
    name: "CreateVideoEnrollmentByUrl",
    method: "POST",
    path: "/enrollments/video/byUrl",
    fields: &[
        Text("userId"),
        Text("contentLanguage"),
        Flag("doBlinkDetection"),
        Media("video"),
    ],
};

pub(crate) const CREATE_FACE_ENROLLMENT: Descriptor = Descriptor {
    name: "CreateFaceEnrollment",
    method: "POST",
    path: "/enrollments/face",
    fields: &[Text("userId"), Flag("doBlinkDetection"), Media("video")],
};

pub(crate) const DELETE_ENROLLMENT: Descriptor = Descriptor {
    name: "DeleteEnrollment",
    method: "DELETE",
    path: "/enrollments/{userId}/{enrollmentId}",
    fields: &[],
};

pub(crate) const DELETE_ALL_ENROLLMENTS: Descriptor = Descriptor {
    name: "DeleteAllEnrollmentsForUser",
    method: "DELETE",
    path: "/enrollments/{userId}/all",
    fields: &[],
};

pub(crate) const VOICE_VERIFICATION: Descriptor = Descriptor {
    name: "VoiceVerification",
    method: "POST",
    path: "/verification",
    fields: &[Text("userId"), Text("contentLanguage"), Media("recording")],
};

pub(crate) const VOICE_VERIFICATION_BY_URL: Descriptor = Descriptor {
    name: "VoiceVerificationByUrl",
    method: "POST",
    path: "/verification/byUrl",
    fields: &[Text("userId"), Text("contentLanguage"), Media("recording")],
};

pub(crate) const VIDEO_VERIFICATION: Descriptor = Descriptor {
    name: "VideoVerification",
    method: "POST",
    path: "/verification/video",
    fields: &[
        Text("userId"),
        Text("contentLanguage"),
        Flag("doBlinkDetection"),
        Media("video"),
    ],
};

pub(crate) const VIDEO_VERIFICATION_BY_URL: Descriptor = Descriptor {
    name: "VideoVerificationByUrl",
    method: "POST",
    path: "/verification/video/byUrl",
    fields: &[
        Text("userId"),
        Text("contentLanguage"),
        Flag("doBlinkDetection"),
        Media("video"),
    ],
};

pub(crate) const FACE_VERIFICATION: Descriptor = Descriptor {
    name: "FaceVerification",
    method: "POST",
    path: "/verification/face",
    fields: &[Text("userId"), Media("video")],
};

pub(crate) const VOICE_IDENTIFICATION: Descriptor = Descriptor {
    name: "VoiceIdentification",
    method: "POST",
    path: "/identification",
    fields: &[Text("groupId"), Text("contentLanguage"), Media("recording")],
};

pub(crate) const VOICE_IDENTIFICATION_BY_URL: Descriptor = Descriptor {
    name: "VoiceIdentificationByUrl",
    method: "POST",
    path: "/identification/byUrl",
    fields: &[Text("groupId"), Text("contentLanguage"), Media("recording")],
};

pub(crate) const VIDEO_IDENTIFICATION: Descriptor = Descriptor {
    name: "VideoIdentification",
    method: "POST",
    path: "/identification/video",
    fields: &[Text("groupId"), Text("contentLanguage"), Media("video")],
};

pub(crate) const VIDEO_IDENTIFICATION_BY_URL: Descriptor = Descriptor {
    name: "VideoIdentificationByUrl",
    method: "POST",
    path: "/identification/video/byUrl",
    fields: &[Text("groupId"), Text("contentLanguage"), Media("video")],
};

/// Every registry row, for table-wide checks.
#[cfg(test)]
pub(crate) const ALL: &[&Descriptor] = &[
    &GET_ALL_USERS,
    &CREATE_USER,
    &DELETE_USER,
    &CREATE_GROUP,
    &ADD_USER_TO_GROUP,
    &REMOVE_USER_FROM_GROUP,
    &DELETE_GROUP,
    &CREATE_VOICE_ENROLLMENT,
    &CREATE_VOICE_ENROLLMENT_BY_URL,
    &CREATE_VIDEO_ENROLLMENT,
    &CREATE_VIDEO_ENROLLMENT_BY_URL,
    &CREATE_FACE_ENROLLMENT,
    &DELETE_ENROLLMENT,
    &DELETE_ALL_ENROLLMENTS,
    &VOICE_VERIFICATION,
    &VOICE_VERIFICATION_BY_URL,
    &VIDEO_VERIFICATION,
    &VIDEO_VERIFICATION_BY_URL,
    &FACE_VERIFICATION,
    &VOICE_IDENTIFICATION,
    &VOICE_IDENTIFICATION_BY_URL,
    &VIDEO_IDENTIFICATION,
    &VIDEO_IDENTIFICATION_BY_URL,
];

/// Substitutes `{name}` placeholders in a path template.
pub(crate) fn resolve(template: &str, params: &[(&str, &str)]) -> String {
    let mut path = template.to_string();
    for (name, value) in params {
        path = path.replace(&format!("{{{name}}}"), value);
    }
    debug_assert!(!path.contains('{'), "unresolved placeholder in `{template}`");
    path
}
