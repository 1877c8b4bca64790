use strum::{AsRefStr, Display, EnumString};

use crate::guidance::Turn;

/// Language of every spoken or displayed phrase.
///
/// Direction *detection* is locale independent; this only selects output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    #[default]
    #[strum(to_string = "ko", serialize = "ko-KR", serialize = "korean")]
    Korean,
    #[strum(to_string = "en", serialize = "en-US", serialize = "english")]
    English,
}

fn street_suffix(street: Option<&str>) -> String {
    street.map(|street| format!(" ({street})")).unwrap_or_default()
}

impl Locale {
    pub fn turn_label(self, turn: Turn) -> &'static str {
        match (self, turn) {
            (Locale::Korean, Turn::Left) => "좌회전",
            (Locale::Korean, Turn::Right) => "우회전",
            (Locale::Korean, Turn::Straight) => "직진",
            (Locale::Korean, Turn::UTurn) => "유턴",
            (Locale::English, Turn::Left) => "left turn",
            (Locale::English, Turn::Right) => "right turn",
            (Locale::English, Turn::Straight) => "straight",
            (Locale::English, Turn::UTurn) => "U-turn",
        }
    }

    /// The imperative spoken once the step is reached.
    pub fn action(self, turn: Option<Turn>) -> &'static str {
        match (self, turn) {
            (Locale::Korean, Some(Turn::Left)) => "이제 좌회전 하세요.",
            (Locale::Korean, Some(Turn::Right)) => "이제 우회전 하세요.",
            (Locale::Korean, Some(Turn::Straight)) => "계속 직진하세요.",
            (Locale::Korean, Some(Turn::UTurn)) => "이제 유턴 하세요.",
            (Locale::Korean, None) => "지금 안내를 따라 이동하세요.",
            (Locale::English, Some(Turn::Left)) => "Turn left now.",
            (Locale::English, Some(Turn::Right)) => "Turn right now.",
            (Locale::English, Some(Turn::Straight)) => "Continue straight.",
            (Locale::English, Some(Turn::UTurn)) => "Make a U-turn now.",
            (Locale::English, None) => "Follow the current instruction now.",
        }
    }

    pub fn immediate(self, maneuver: &str, street: Option<&str>) -> String {
        let street = street_suffix(street);
        match self {
            Locale::Korean => format!("현재 위치에서 {maneuver}{street}"),
            Locale::English => format!("From current position, {maneuver}{street}"),
        }
    }

    pub fn ahead(self, distance: &str, maneuver: &str, street: Option<&str>) -> String {
        let street = street_suffix(street);
        match self {
            Locale::Korean => format!("{distance} 이동 후 {maneuver}{street}"),
            Locale::English => format!("{distance} ahead, {maneuver}{street}"),
        }
    }

    /// Stand-in for an instruction that carried nothing usable.
    /// `index` is zero based.
    pub fn placeholder(self, index: usize) -> String {
        let number = index + 1;
        match self {
            Locale::Korean => format!("단계 {number}: 안내 정보 없음"),
            Locale::English => format!("Step {number}: guidance unavailable"),
        }
    }

    pub fn fallback_approach(self) -> &'static str {
        match self {
            Locale::Korean => "경로 안내를 준비 중입니다. 지도에서 안내선을 참고해주세요.",
            Locale::English => "Preparing route guidance. Follow the guide line on the map.",
        }
    }

    pub fn fallback_action(self) -> &'static str {
        match self {
            Locale::Korean => "안내선 방향으로 이동하세요.",
            Locale::English => "Move in the direction of the guide line.",
        }
    }

    pub fn arrival(self) -> &'static str {
        match self {
            Locale::Korean => "목적지에 도착했습니다.",
            Locale::English => "You have arrived at your destination.",
        }
    }

    pub fn route_found(self, destination: Option<&str>) -> String {
        match (self, destination) {
            (Locale::Korean, Some(label)) => format!("'{label}'까지의 안전 경로를 찾았습니다."),
            (Locale::Korean, None) => "안전 경로 안내를 시작합니다.".to_string(),
            (Locale::English, Some(label)) => format!("Found a safe route to '{label}'."),
            (Locale::English, None) => "Starting safe route guidance.".to_string(),
        }
    }

    pub fn totals(self, distance: Option<&str>, duration: Option<&str>) -> String {
        match self {
            Locale::Korean => format!(
                "총 {}, 예상 소요 {}.",
                distance.unwrap_or("거리 미확인"),
                duration.unwrap_or("시간 미확인")
            ),
            Locale::English => format!(
                "Total {}, estimated {}.",
                distance.unwrap_or("unknown distance"),
                duration.unwrap_or("unknown time")
            ),
        }
    }

    pub fn avoided(self, count: u32) -> String {
        match (self, count) {
            (Locale::Korean, 0) => "흡연 구역을 만나지 않는 경로입니다.".to_string(),
            (Locale::Korean, n) => format!("흡연 구역 {n}곳을 우회합니다."),
            (Locale::English, 0) => "This route passes no smoking areas.".to_string(),
            (Locale::English, 1) => "Avoiding 1 smoking area.".to_string(),
            (Locale::English, n) => format!("Avoiding {n} smoking areas."),
        }
    }

    pub fn first_instruction(self, instruction: &str) -> String {
        match self {
            Locale::Korean => format!("첫 안내: {instruction}"),
            Locale::English => format!("First instruction: {instruction}"),
        }
    }

    pub fn report_received(self) -> &'static str {
        match self {
            Locale::Korean => "신고가 성공적으로 접수되었습니다.",
            Locale::English => "Your report has been received.",
        }
    }

    pub fn report_failed(self) -> &'static str {
        match self {
            Locale::Korean => "신고 접수 중 오류가 발생했습니다.",
            Locale::English => "Something went wrong while submitting your report.",
        }
    }

    pub fn missing_description(self) -> &'static str {
        match self {
            Locale::Korean => "신고 내용을 입력해주세요.",
            Locale::English => "Please describe what you are reporting.",
        }
    }

    pub fn missing_location(self) -> &'static str {
        match self {
            Locale::Korean => "현재 위치를 불러올 수 없습니다.",
            Locale::English => "Your current location is unavailable.",
        }
    }

    pub fn missing_device(self) -> &'static str {
        match self {
            Locale::Korean => "기기 ID를 불러올 수 없습니다.",
            Locale::English => "This device is not registered yet.",
        }
    }

    pub fn locating(self) -> &'static str {
        match self {
            Locale::Korean => "현재 위치를 가져오는 중입니다. 잠시 후 다시 시도해주세요.",
            Locale::English => "Getting your current location. Please try again shortly.",
        }
    }

    pub fn rescanning(self) -> &'static str {
        match self {
            Locale::Korean => "현재 위치로 이동했습니다. 주변 흡연 구역을 다시 탐색합니다.",
            Locale::English => "Centered on your location. Scanning for nearby smoking areas again.",
        }
    }

    pub fn complaint_noted(self) -> &'static str {
        match self {
            Locale::Korean => "민원 신고가 접수되었습니다.",
            Locale::English => "Your complaint has been noted.",
        }
    }

    pub fn not_understood(self) -> &'static str {
        match self {
            Locale::Korean => "명령을 이해하지 못했습니다.",
            Locale::English => "Sorry, I did not understand that command.",
        }
    }
}
