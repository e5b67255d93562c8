//! Детерминированный генератор начальных данных оргструктуры
//!
//! Корень → 10 подразделений → N команд в каждом; должности по шаблонам
//! уровня; сотрудники распределяются только по командам.

use contracts::domain::a001_org::aggregate::{Org, OrgId};
use contracts::domain::a002_rank::aggregate::{Rank, RankId};
use contracts::domain::a003_user::aggregate::{User, UserId};

use crate::shared::config::SeedConfig;

pub const ROOT_ORG_ID: &str = "org-root";
const ROOT_ORG_NAME: &str = "SOFTONE HQ";
const EMAIL_DOMAIN: &str = "softone.example.com";

const DEPARTMENT_NAMES: [&str; 10] = [
    "디지털혁신본부",
    "클라우드전략본부",
    "플랫폼사업본부",
    "고객성공본부",
    "AI서비스본부",
    "스마트팩토리본부",
    "글로벌사업본부",
    "경영지원본부",
    "솔루션사업본부",
    "신사업센터",
];

const TEAM_KEYWORDS: [&str; 10] = [
    "플랫폼", "데이터", "AI", "모바일", "Infra", "컨설팅", "DevOps", "운영", "스마트", "클라우드",
];
const TEAM_SUFFIXES: [&str; 7] = ["1팀", "2팀", "3팀", "랩", "Agile팀", "센터", "Cell"];

const ROOT_RANKS: [(&str, i32); 3] = [("CEO", 1), ("COO", 2), ("CFO", 3)];
const DEPARTMENT_RANKS: [(&str, i32); 6] = [
    ("본부장", 1),
    ("실장", 2),
    ("수석", 3),
    ("책임", 4),
    ("선임", 5),
    ("주임", 6),
];
const TEAM_RANKS: [(&str, i32); 6] = [
    ("팀장", 2),
    ("수석", 3),
    ("선임", 4),
    ("주임", 5),
    ("사원", 6),
    ("인턴", 7),
];

const FAMILY_NAMES: [&str; 24] = [
    "Kim", "Lee", "Park", "Choi", "Jung", "Han", "Kang", "Yoon", "Cho", "Lim", "Song", "Shin",
    "Seo", "Jang", "Ryu", "Kwon", "Moon", "An", "Oh", "Nam", "Baek", "Hwang", "Jeon", "Bae",
];
const GIVEN_NAMES: [&str; 31] = [
    "Minjun", "Seoyun", "Jiwon", "Yejin", "Haneul", "Donghyun", "Jisoo", "Gyuri", "Harin",
    "Yubin", "Sumin", "Jimin", "Sunwoo", "Heejin", "Minsung", "Sera", "Yuna", "Jaeho", "Hyemin",
    "Suhyeon", "Youngju", "Hajin", "Doyoon", "Eunseo", "Minkyu", "Rowoon", "Youngeun", "Harin",
    "Sehun", "Hyojin", "Yeonsu",
];

/// Сгенерированный набор трёх коллекций
#[derive(Debug, Clone)]
pub struct SeedData {
    pub orgs: Vec<Org>,
    pub ranks: Vec<Rank>,
    pub users: Vec<User>,
}

pub fn generate(config: &SeedConfig) -> SeedData {
    let orgs = build_orgs(config.teams_per_department);
    let ranks = build_ranks(&orgs);
    let users = build_users(&orgs, &ranks, config.target_user_count);
    SeedData { orgs, ranks, users }
}

fn build_orgs(teams_per_department: usize) -> Vec<Org> {
    let root_id = OrgId::new(ROOT_ORG_ID);
    let mut orgs = vec![Org {
        id: root_id.clone(),
        name: ROOT_ORG_NAME.to_string(),
        parent_id: None,
        is_active: true,
    }];

    for (dept_idx, dept_name) in DEPARTMENT_NAMES.iter().enumerate() {
        let dept_id = OrgId::new(format!("org-dept-{}", dept_idx + 1));
        orgs.push(Org {
            id: dept_id.clone(),
            name: dept_name.to_string(),
            parent_id: Some(root_id.clone()),
            is_active: true,
        });

        for i in 0..teams_per_department {
            orgs.push(Org {
                id: OrgId::new(format!("{}-team-{}", dept_id, i + 1)),
                name: team_name(dept_idx, i),
                parent_id: Some(dept_id.clone()),
                is_active: true,
            });
        }
    }

    orgs
}

/// Имя команды; после исчерпания суффиксов добавляется номер круга,
/// иначе имена команд разных подразделений совпадают
fn team_name(dept_idx: usize, team_idx: usize) -> String {
    let keyword = TEAM_KEYWORDS[(dept_idx + team_idx) % TEAM_KEYWORDS.len()];
    let suffix = TEAM_SUFFIXES[team_idx % TEAM_SUFFIXES.len()];
    match team_idx / TEAM_SUFFIXES.len() {
        0 => format!("{} {}", keyword, suffix),
        round => format!("{} {} ({})", keyword, suffix, round + 1),
    }
}

fn rank_templates(org: &Org) -> &'static [(&'static str, i32)] {
    match &org.parent_id {
        None => &ROOT_RANKS,
        Some(parent) if parent.0 == ROOT_ORG_ID => &DEPARTMENT_RANKS,
        Some(_) => &TEAM_RANKS,
    }
}

fn build_ranks(orgs: &[Org]) -> Vec<Rank> {
    let mut ranks = Vec::new();
    let mut counter = 1;

    for org in orgs {
        for (name, level) in rank_templates(org) {
            ranks.push(Rank {
                id: RankId::new(format!("rank-{}", counter)),
                org_id: org.id.clone(),
                name: name.to_string(),
                level: *level,
                is_active: true,
            });
            counter += 1;
        }
    }

    ranks
}

/// Только строчные латинские буквы
fn slug(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

fn build_users(orgs: &[Org], ranks: &[Rank], target: usize) -> Vec<User> {
    let worker_orgs: Vec<&Org> = orgs
        .iter()
        .filter(|org| matches!(&org.parent_id, Some(parent) if parent.0 != ROOT_ORG_ID))
        .collect();
    if worker_orgs.is_empty() || ranks.is_empty() {
        return Vec::new();
    }

    let mut users = Vec::with_capacity(target);
    let mut counter: usize = 1;

    while users.len() < target {
        let org = worker_orgs[counter % worker_orgs.len()];
        let org_ranks: Vec<&Rank> = ranks.iter().filter(|r| r.org_id == org.id).collect();
        let rank = if org_ranks.is_empty() {
            &ranks[counter % ranks.len()]
        } else {
            org_ranks[counter % org_ranks.len()]
        };

        let family = FAMILY_NAMES[counter % FAMILY_NAMES.len()];
        let given = GIVEN_NAMES[(counter + counter / FAMILY_NAMES.len()) % GIVEN_NAMES.len()];

        users.push(User {
            id: UserId::new(format!("user-{}", counter)),
            org_id: org.id.clone(),
            rank_id: rank.id.clone(),
            name: format!("{} {}", family, given),
            email: format!("{}.{}{}@{}", slug(family), slug(given), counter, EMAIL_DOMAIN),
            is_active: counter % 13 != 0,
        });

        counter += 1;
    }

    users
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn default_seed() -> SeedData {
        generate(&SeedConfig::default())
    }

    #[test]
    fn test_default_sizes() {
        let seed = default_seed();
        // корень + 10 подразделений + 50 команд
        assert_eq!(seed.orgs.len(), 61);
        // 3 + 10 * 6 + 50 * 6
        assert_eq!(seed.ranks.len(), 363);
        assert_eq!(seed.users.len(), 1000);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = default_seed();
        let b = default_seed();
        assert_eq!(a.orgs, b.orgs);
        assert_eq!(a.ranks, b.ranks);
        assert_eq!(a.users, b.users);
    }

    #[test]
    fn test_first_records() {
        let seed = default_seed();
        assert_eq!(seed.orgs[0].id.0, ROOT_ORG_ID);
        assert_eq!(seed.orgs[1].id.0, "org-dept-1");
        assert_eq!(seed.orgs[2].id.0, "org-dept-1-team-1");
        assert_eq!(seed.orgs[2].name, "플랫폼 1팀");
        assert_eq!(seed.ranks[0].name, "CEO");
        assert_eq!(seed.ranks[0].id.0, "rank-1");
        assert_eq!(seed.ranks[3].name, "본부장");

        let first = &seed.users[0];
        assert_eq!(first.id.0, "user-1");
        assert_eq!(first.name, "Lee Seoyun");
        assert_eq!(first.email, "lee.seoyun1@softone.example.com");
        assert!(first.is_active);
        assert!(!seed.users[12].is_active);
    }

    #[test]
    fn test_seed_satisfies_invariants() {
        let seed = default_seed();

        let org_names: HashSet<&str> = seed.orgs.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(org_names.len(), seed.orgs.len());

        let org_ids: HashSet<&OrgId> = seed.orgs.iter().map(|o| &o.id).collect();
        let rank_keys: HashSet<(&OrgId, &str)> =
            seed.ranks.iter().map(|r| (&r.org_id, r.name.as_str())).collect();
        assert_eq!(rank_keys.len(), seed.ranks.len());
        assert!(seed.ranks.iter().all(|r| org_ids.contains(&r.org_id)));

        let rank_ids: HashSet<&RankId> = seed.ranks.iter().map(|r| &r.id).collect();
        let emails: HashSet<&str> = seed.users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), seed.users.len());
        assert!(seed.users.iter().all(|u| org_ids.contains(&u.org_id)));
        assert!(seed.users.iter().all(|u| rank_ids.contains(&u.rank_id)));
    }

    #[test]
    fn test_team_names_stay_unique_past_suffix_list() {
        let seed = generate(&SeedConfig {
            teams_per_department: 8,
            target_user_count: 100,
        });
        assert_eq!(seed.orgs.len(), 91);
        let names: HashSet<&str> = seed.orgs.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names.len(), seed.orgs.len());
        // dept-1 team-8 и dept-8 team-1 раньше получали одно имя "운영 1팀"
        assert_eq!(team_name(0, 7), "운영 1팀 (2)");
        assert_eq!(team_name(7, 0), "운영 1팀");
    }

    #[test]
    fn test_team_names_unique_for_large_departments() {
        let seed = generate(&SeedConfig {
            teams_per_department: 75,
            target_user_count: 0,
        });
        let names: HashSet<&str> = seed.orgs.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names.len(), seed.orgs.len());
    }

    #[test]
    fn test_users_sit_in_teams_with_own_ranks() {
        let seed = default_seed();
        for user in &seed.users {
            assert!(user.org_id.0.contains("-team-"));
            let rank = seed.ranks.iter().find(|r| r.id == user.rank_id).unwrap();
            assert_eq!(rank.org_id, user.org_id);
        }
    }

    #[test]
    fn test_slug_keeps_latin_letters_only() {
        assert_eq!(slug("Kim"), "kim");
        assert_eq!(slug("Ryu-2"), "ryu");
    }
}
