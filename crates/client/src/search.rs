use campus_api_types::Person;

/// 按姓名或邮箱做不区分大小写的子串匹配。关键字为空时返回全部。
pub fn search_people<'a>(people: &'a [Person], term: &str) -> Vec<&'a Person> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return people.iter().collect();
    }

    people
        .iter()
        .filter(|person| {
            person.name.to_lowercase().contains(&term)
                || person.email.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Person> {
        vec![
            Person {
                id: 1,
                name: "Ana Silva".to_string(),
                email: "ana@ipw.pt".to_string(),
            },
            Person {
                id: 2,
                name: "Bruno".to_string(),
                email: "bruno.silva@ipw.pt".to_string(),
            },
            Person {
                id: 3,
                name: "Carla".to_string(),
                email: "carla@example.com".to_string(),
            },
        ]
    }

    fn ids(found: Vec<&Person>) -> Vec<i32> {
        found.into_iter().map(|person| person.id).collect()
    }

    #[test]
    fn test_matches_name_or_email_ignoring_case() {
        let people = people();

        assert_eq!(ids(search_people(&people, "SILVA")), vec![1, 2]);
        assert_eq!(ids(search_people(&people, "example")), vec![3]);
    }

    #[test]
    fn test_blank_term_keeps_everyone() {
        let people = people();

        assert_eq!(ids(search_people(&people, "  ")), vec![1, 2, 3]);
    }

    #[test]
    fn test_no_match() {
        let people = people();

        assert!(search_people(&people, "zeca").is_empty());
    }
}
