//! Translation lookup.

use crate::models::session::Language;

const EN: &[(&str, &str)] = &[
    ("email", "Email"),
    ("password", "Password"),
    ("login", "Login"),
    ("register", "Register"),
    ("submit", "Submit"),
    ("invalidEmail", "Invalid email address"),
    (
        "invalidPassword",
        "Password must be 8-15 characters with 1 capital letter, 1 number, and 1 special character",
    ),
    ("popularMovies", "Popular Movies"),
    ("logout", "Logout"),
    ("loading", "Loading..."),
    ("switchToArabic", "Arabic"),
    ("switchToEnglish", "English"),
];

const AR: &[(&str, &str)] = &[
    ("email", "البريد الإلكتروني"),
    ("password", "كلمة المرور"),
    ("login", "تسجيل الدخول"),
    ("register", "إنشاء حساب"),
    ("submit", "إرسال"),
    ("invalidEmail", "بريد إلكتروني غير صالح"),
    (
        "invalidPassword",
        "يجب أن تكون كلمة المرور بين 8-15 حرفًا وتحتوي على حرف كبير واحد ورقم وحرف خاص",
    ),
    ("popularMovies", "الأفلام الشعبية"),
    ("logout", "تسجيل الخروج"),
    ("loading", "جارٍ التحميل..."),
    ("switchToArabic", "العربية"),
    ("switchToEnglish", "الإنجليزية"),
];

fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => EN,
        Language::Ar => AR,
    }
}

/// Look up `key`, returning the key itself when there is no entry.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    lookup(language, key).unwrap_or(key)
}

/// Look up `key`, returning `fallback` when there is no entry.
pub fn translate_or<'a>(language: Language, key: &str, fallback: &'a str) -> &'a str {
    lookup(language, key).unwrap_or(fallback)
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Label for the language toggle: names the language it switches to.
pub fn toggle_label(language: Language) -> &'static str {
    match language {
        Language::En => translate(language, "switchToArabic"),
        Language::Ar => translate(language, "switchToEnglish"),
    }
}
