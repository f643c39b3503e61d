/// All localized user-facing strings for a locale
///
/// Strings are plain text; LINE renders them verbatim, so no escaping is needed.
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Welcome ====================
    /// Body of the welcome card
    pub welcome: &'static str,

    /// Label of the language-selection button
    pub select_language: &'static str,

    /// Label of the "start ordering" command
    pub start_ordering: &'static str,

    // ==================== Language Selection ====================
    /// Title of the confirmation card after a language change
    pub language_set_title: &'static str,

    /// Body of the confirmation card
    /// Placeholders: {language}, {start}
    pub language_set_body: &'static str,
}

/// Brand name used as the card title for every locale
pub const APP_TITLE: &str = "點餐傳聲筒";

/// Header of the language picker card (shown above the English subtitle)
pub const LANGUAGE_MENU_HEADER: &str = "請選擇您的介面語言";

/// Subtitle of the language picker card
pub const LANGUAGE_MENU_SUBTITLE: &str = "Please select your interface language";

/// Help text. Only one version exists; it is sent whatever the user's locale.
/// Placeholders: {languages}
pub const HELP_TEXT: &str = "📋 點餐傳聲筒使用說明

🎯 主要功能：
• 選擇鄰近店家
• 翻譯菜單內容
• 生成中文語音檔
• 順利完成點餐

📝 常用指令：
• 開始點餐 - 進入點餐流程
• 選擇店家 - 查看鄰近店家
• 語言設定 - 更改介面語言
• 幫助 - 顯示此說明

🌍 支援語言：
{languages}

💡 小提示：
使用語音訊息可以更快完成點餐！";

// ==================== Traditional Chinese Strings ====================

pub const TRADITIONAL_CHINESE_STRINGS: LocaleStrings = LocaleStrings {
    welcome: "歡迎使用點餐傳聲筒！\n\n\
我是您的專屬點餐助手，可以幫助您：\n\
• 選擇鄰近店家\n\
• 翻譯菜單內容\n\
• 生成中文語音檔\n\
• 順利完成點餐\n\n\
請選擇您的介面語言：",
    select_language: "請選擇語言",
    start_ordering: "開始點餐",

    language_set_title: "✅ 語言設定完成！",
    language_set_body: "您選擇的語言：{language}\n\n\
現在可以開始使用點餐功能了！\n\n\
請輸入以下指令：\n\
• {start}\n\
• 選擇店家\n\
• 查看菜單",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    welcome: "Welcome to Ordering Helper!\n\n\
I am your dedicated ordering assistant who can help you:\n\
• Choose nearby restaurants\n\
• Translate menu content\n\
• Generate Chinese voice files\n\
• Complete ordering smoothly\n\n\
Please select your interface language:",
    select_language: "Select Language",
    start_ordering: "Start Ordering",

    language_set_title: "✅ Language set!",
    language_set_body: "Your language: {language}\n\n\
You can start ordering now!\n\n\
Try these commands:\n\
• {start}\n\
• Choose a restaurant\n\
• View the menu",
};

// ==================== Japanese Strings ====================

pub const JAPANESE_STRINGS: LocaleStrings = LocaleStrings {
    welcome: "注文ヘルパーへようこそ！\n\n\
私はあなたの専用注文アシスタントで、以下のお手伝いができます：\n\
• 近くの店舗を選択\n\
• メニュー内容を翻訳\n\
• 中国語音声ファイルを生成\n\
• スムーズに注文を完了\n\n\
インターフェース言語を選択してください：",
    select_language: "言語を選択",
    start_ordering: "注文開始",

    language_set_title: "✅ 言語の設定が完了しました！",
    language_set_body: "選択した言語：{language}\n\n\
注文機能をご利用いただけます！\n\n\
次のコマンドを入力してください：\n\
• {start}\n\
• 店舗を選択\n\
• メニューを見る",
};

// ==================== Korean Strings ====================

pub const KOREAN_STRINGS: LocaleStrings = LocaleStrings {
    welcome: "주문 도우미에 오신 것을 환영합니다!\n\n\
저는 여러분의 전용 주문 어시스턴트로 다음을 도와드릴 수 있습니다:\n\
• 근처 식당 선택\n\
• 메뉴 내용 번역\n\
• 중국어 음성 파일 생성\n\
• 원활한 주문 완료\n\n\
인터페이스 언어를 선택해 주세요:",
    select_language: "언어 선택",
    start_ordering: "주문 시작",

    language_set_title: "✅ 언어 설정 완료!",
    language_set_body: "선택한 언어: {language}\n\n\
이제 주문 기능을 사용할 수 있습니다!\n\n\
다음 명령어를 입력해 주세요:\n\
• {start}\n\
• 식당 선택\n\
• 메뉴 보기",
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&LocaleStrings; 4] = [
        &TRADITIONAL_CHINESE_STRINGS,
        &ENGLISH_STRINGS,
        &JAPANESE_STRINGS,
        &KOREAN_STRINGS,
    ];

    #[test]
    fn test_confirmation_bodies_have_placeholders() {
        for strings in ALL {
            assert!(strings.language_set_body.contains("{language}"));
            assert!(strings.language_set_body.contains("{start}"));
        }
    }

    #[test]
    fn test_welcome_texts_are_distinct() {
        assert_ne!(TRADITIONAL_CHINESE_STRINGS.welcome, ENGLISH_STRINGS.welcome);
        assert_ne!(JAPANESE_STRINGS.welcome, KOREAN_STRINGS.welcome);
    }

    #[test]
    fn test_english_welcome_content() {
        assert!(ENGLISH_STRINGS.welcome.starts_with("Welcome to Ordering Helper!"));
        assert!(ENGLISH_STRINGS.welcome.contains("• Translate menu content"));
    }

    #[test]
    fn test_help_text_has_languages_placeholder() {
        assert!(HELP_TEXT.contains("{languages}"));
        assert!(HELP_TEXT.starts_with("📋"));
    }
}
