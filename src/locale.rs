use chrono::NaiveDate;

use crate::config::Language;

/// Report wording for one display language.
pub trait Locale {
    fn title(&self) -> &'static str;
    fn countries_visited(&self, count: usize, today: NaiveDate) -> String;
    fn inside(&self, home: &str, days: u64, years: f64, percent: &str) -> String;
    fn outside(&self, home: &str, days: u64, years: f64, percent: &str) -> String;
    /// Shown under the home/abroad lines when the home country is not in the log.
    fn home_absent(&self, home: &str) -> String;
    fn residency(&self, place: &str, years: u64, days: u64) -> String;
    fn table_header(&self) -> [&'static str; 6];
    fn rank(&self, rank: u32) -> String {
        rank.to_string()
    }
    fn other(&self) -> &'static str;
    fn chronological_title(&self) -> &'static str;
}

pub fn locale_for(lang: Language) -> Box<dyn Locale> {
    match lang {
        Language::English => Box::new(English),
        Language::Korean => Box::new(Korean),
        Language::KoreanHanja => Box::new(KoreanHanja),
        Language::Chinese => Box::new(Chinese),
    }
}

pub struct English;

impl Locale for English {
    fn title(&self) -> &'static str {
        "Travel Day Counter"
    }

    fn countries_visited(&self, count: usize, today: NaiveDate) -> String {
        format!("{count} countries visited until {today}")
    }

    fn inside(&self, home: &str, days: u64, years: f64, percent: &str) -> String {
        format!("Inside {home}: {days} days ({years:.1} years, {percent})")
    }

    fn outside(&self, home: &str, days: u64, years: f64, percent: &str) -> String {
        format!("Outside {home}: {days} days ({years:.1} years, {percent})")
    }

    fn home_absent(&self, home: &str) -> String {
        format!("({home} does not appear in the travel log)")
    }

    fn residency(&self, place: &str, years: u64, days: u64) -> String {
        format!("Residency in {place}: {years} year(s) {days} day(s)")
    }

    fn table_header(&self) -> [&'static str; 6] {
        ["COUNTRY", "DAYS", "%", "RANK.", "FIRST VISIT", "LAST VISIT"]
    }

    fn other(&self) -> &'static str {
        "OTHER"
    }

    fn chronological_title(&self) -> &'static str {
        "Chronological Report"
    }
}

pub struct Korean;

impl Locale for Korean {
    fn title(&self) -> &'static str {
        "방문한 나라에 체류 기간"
    }

    fn countries_visited(&self, count: usize, today: NaiveDate) -> String {
        format!("{today}까지 방문한 {count}개의 국가")
    }

    fn inside(&self, home: &str, days: u64, years: f64, percent: &str) -> String {
        format!("{home} 내: {days} 일 ({years:.1} 년, {percent})")
    }

    fn outside(&self, home: &str, days: u64, years: f64, percent: &str) -> String {
        format!("{home} 외: {days} 일 ({years:.1} 년, {percent})")
    }

    fn home_absent(&self, home: &str) -> String {
        format!("({home}은(는) 여행 기록에 없음)")
    }

    fn residency(&self, place: &str, years: u64, days: u64) -> String {
        format!("{place}에 합법적 거주기간: {years} 년 {days} 일")
    }

    fn table_header(&self) -> [&'static str; 6] {
        ["국가", "일수", "퍼센트", "순위", "처음 방문 날짜", "마지막 방문 날짜"]
    }

    fn rank(&self, rank: u32) -> String {
        format!("{rank}위")
    }

    fn other(&self) -> &'static str {
        "기타"
    }

    fn chronological_title(&self) -> &'static str {
        "연대순 방문 기록"
    }
}

pub struct KoreanHanja;

impl Locale for KoreanHanja {
    fn title(&self) -> &'static str {
        "訪問한 나라에 滯留期間"
    }

    fn countries_visited(&self, count: usize, today: NaiveDate) -> String {
        format!("{today}까지 訪問한 {count}個의 國家")
    }

    fn inside(&self, home: &str, days: u64, years: f64, percent: &str) -> String {
        format!("{home} 內: {days} 日 ({years:.1} 年, {percent})")
    }

    fn outside(&self, home: &str, days: u64, years: f64, percent: &str) -> String {
        format!("{home} 外: {days} 日 ({years:.1} 年, {percent})")
    }

    fn home_absent(&self, home: &str) -> String {
        format!("({home}은(는) 旅行記錄에 없음)")
    }

    fn residency(&self, place: &str, years: u64, days: u64) -> String {
        format!("{place}에 合法的居住期間: {years} 年 {days} 日")
    }

    fn table_header(&self) -> [&'static str; 6] {
        ["國家", "日數", "퍼센트", "順位", "처음 訪問 날짜", "마지막 訪問 날짜"]
    }

    fn rank(&self, rank: u32) -> String {
        format!("{rank}位")
    }

    fn other(&self) -> &'static str {
        "其他"
    }

    fn chronological_title(&self) -> &'static str {
        "年代順訪問記錄"
    }
}

pub struct Chinese;

impl Locale for Chinese {
    fn title(&self) -> &'static str {
        "到訪國家停留紀錄"
    }

    fn countries_visited(&self, count: usize, today: NaiveDate) -> String {
        format!("至{today}已訪問{count}個國家")
    }

    fn inside(&self, home: &str, days: u64, years: f64, percent: &str) -> String {
        format!("{home}內 {days} 天（{years:.1}年，{percent}）")
    }

    fn outside(&self, home: &str, days: u64, years: f64, percent: &str) -> String {
        format!("{home}外 {days} 天（{years:.1}年，{percent}）")
    }

    fn home_absent(&self, home: &str) -> String {
        format!("（{home}未出現於旅行紀錄）")
    }

    fn residency(&self, place: &str, years: u64, days: u64) -> String {
        format!("{place}合法居留時間 {years} 年 {days} 天")
    }

    fn table_header(&self) -> [&'static str; 6] {
        ["國家", "天數", "百分比", "排名", "最初訪問日", "最近訪問日"]
    }

    fn other(&self) -> &'static str {
        "其他"
    }

    fn chronological_title(&self) -> &'static str {
        "年度訪問紀錄"
    }
}
