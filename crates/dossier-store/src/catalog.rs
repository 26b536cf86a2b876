//! Built-in sample catalogs.
//!
//! These mirror the literal datasets the site ships: the document library,
//! the investigation timeline, and the affiliations sidebar. They double as
//! the demo data for the CLI and the fixture data for integration tests.

use chrono::NaiveDate;

use dossier_model::{
    AffiliationKind, Classification, DocumentType, FieldKind, FieldName, FieldSpec, FieldValue,
    Record, RecordId, Schema, Severity,
};

use crate::error::{Result, StoreError};
use crate::store::RecordStore;

fn field(name: &str) -> Result<FieldName> {
    Ok(FieldName::new(name)?)
}

fn date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| StoreError::Invalid(format!("invalid date {value:?}: {e}")))
}

/// Schema of the document library catalog.
pub fn document_schema() -> Result<Schema> {
    Ok(Schema::new(
        "documents",
        vec![
            FieldSpec::new(field("title")?, FieldKind::Text).searchable(),
            FieldSpec::new(field("description")?, FieldKind::Text).searchable(),
            FieldSpec::new(field("type")?, FieldKind::Category),
            FieldSpec::new(field("classification")?, FieldKind::Category),
            FieldSpec::new(field("date")?, FieldKind::Date),
            FieldSpec::new(field("size")?, FieldKind::Text),
            FieldSpec::new(field("category")?, FieldKind::Category),
            FieldSpec::new(field("investigation")?, FieldKind::Text),
            FieldSpec::new(field("downloads")?, FieldKind::Number),
            FieldSpec::new(field("preview")?, FieldKind::Flag),
        ],
    )?)
}

#[allow(clippy::too_many_arguments)]
fn document(
    id: &str,
    title: &str,
    description: &str,
    doc_type: &str,
    classification: &str,
    doc_date: &str,
    size: &str,
    category: &str,
    investigation: Option<&str>,
    downloads: i64,
    preview: bool,
) -> Result<Record> {
    // Closed enumerations are parsed up front so a typo in the sample data
    // is a construction error, not a stray category at render time.
    let doc_type: DocumentType = doc_type.parse().map_err(StoreError::Invalid)?;
    let classification: Classification = classification.parse().map_err(StoreError::Invalid)?;
    let investigation = match investigation {
        Some(name) => FieldValue::text(name),
        None => FieldValue::Missing,
    };
    Ok(Record::new(RecordId::new(id)?)
        .with_cell(field("title")?, FieldValue::text(title))
        .with_cell(field("description")?, FieldValue::text(description))
        .with_cell(field("type")?, FieldValue::text(doc_type.as_str()))
        .with_cell(
            field("classification")?,
            FieldValue::text(classification.as_str()),
        )
        .with_cell(field("date")?, FieldValue::Date(date(doc_date)?))
        .with_cell(field("size")?, FieldValue::text(size))
        .with_cell(field("category")?, FieldValue::text(category))
        .with_cell(field("investigation")?, investigation)
        .with_cell(field("downloads")?, FieldValue::Number(downloads))
        .with_cell(field("preview")?, FieldValue::Flag(preview)))
}

/// The document library: primary source documents from the investigations.
pub fn document_library() -> Result<RecordStore> {
    let records = vec![
        document(
            "1",
            "FDA Internal Memo - Drug Approval Fast-Track",
            "Internal communications regarding expedited approval process for experimental treatments.",
            "pdf",
            "public",
            "2024-11-15",
            "2.4 MB",
            "Health",
            Some("Project Nightshade"),
            1247,
            true,
        )?,
        document(
            "2",
            "Corporate Lobbying Expenditure Report Q3 2024",
            "Detailed breakdown of pharmaceutical industry lobbying spending.",
            "pdf",
            "public",
            "2024-10-28",
            "856 KB",
            "Corporate",
            None,
            892,
            true,
        )?,
        document(
            "3",
            "EPA Waiver Documentation - Chemical Plant",
            "Environmental protection waivers granted to Meridian Chemical facilities.",
            "archive",
            "public",
            "2024-09-12",
            "15.7 MB",
            "Environmental",
            Some("Silent Erosion"),
            567,
            false,
        )?,
        document(
            "4",
            "Classified Budget Allocation - Defense Department",
            "Redacted portions of defense spending for black budget programs.",
            "pdf",
            "restricted",
            "2024-08-03",
            "1.1 MB",
            "Government",
            None,
            2341,
            true,
        )?,
        document(
            "5",
            "Internal Clinical Trial Data - Adverse Events",
            "Unreported adverse events from Phase 3 clinical trials.",
            "pdf",
            "sensitive",
            "2024-07-22",
            "4.8 MB",
            "Health",
            Some("Project Nightshade"),
            3156,
            true,
        )?,
        document(
            "6",
            "Financial Transaction Records - Shell Companies",
            "Bank records linking offshore entities to domestic operations.",
            "archive",
            "sensitive",
            "2024-06-15",
            "23.4 MB",
            "Financial",
            None,
            1834,
            false,
        )?,
        document(
            "7",
            "Satellite Imagery - Facility Construction",
            "Time-lapse satellite images showing undisclosed facility construction.",
            "image",
            "public",
            "2024-05-08",
            "45.2 MB",
            "Government",
            None,
            723,
            true,
        )?,
        document(
            "8",
            "Whistleblower Testimony Transcript",
            "Anonymized testimony from former agency employee.",
            "text",
            "restricted",
            "2024-04-19",
            "156 KB",
            "Government",
            None,
            4521,
            true,
        )?,
    ];
    RecordStore::new(document_schema()?, records)
}

/// Schema of the timeline catalog. `date` is the display form ("1932-1972");
/// `sort_date` is the instant the comparator uses.
pub fn timeline_schema() -> Result<Schema> {
    Ok(Schema::new(
        "timeline",
        vec![
            FieldSpec::new(field("date")?, FieldKind::Text),
            FieldSpec::new(field("sort_date")?, FieldKind::Date),
            FieldSpec::new(field("title")?, FieldKind::Text).searchable(),
            FieldSpec::new(field("description")?, FieldKind::Text).searchable(),
            FieldSpec::new(field("category")?, FieldKind::Category),
            FieldSpec::new(field("severity")?, FieldKind::Category),
            FieldSpec::new(field("slug")?, FieldKind::Text),
            FieldSpec::new(field("tags")?, FieldKind::Text),
        ],
    )?)
}

#[allow(clippy::too_many_arguments)]
fn event(
    slug: &str,
    display_date: &str,
    sort_date: &str,
    title: &str,
    description: &str,
    category: &str,
    severity: &str,
    tags: &str,
) -> Result<Record> {
    let severity: Severity = severity.parse().map_err(StoreError::Invalid)?;
    Ok(Record::new(RecordId::new(slug)?)
        .with_cell(field("date")?, FieldValue::text(display_date))
        .with_cell(field("sort_date")?, FieldValue::Date(date(sort_date)?))
        .with_cell(field("title")?, FieldValue::text(title))
        .with_cell(field("description")?, FieldValue::text(description))
        .with_cell(field("category")?, FieldValue::text(category))
        .with_cell(field("severity")?, FieldValue::text(severity.as_str()))
        .with_cell(field("slug")?, FieldValue::text(slug))
        .with_cell(field("tags")?, FieldValue::text(tags)))
}

/// The investigation timeline, newest first like the published page.
pub fn timeline() -> Result<RecordStore> {
    let records = vec![
        event(
            "scotus-ethics",
            "July 1, 2024",
            "2024-07-01",
            "SCOTUS Grants Presidential Immunity",
            "Supreme Court grants broad immunity for 'official acts.' Shields presidents from prosecution. 6-3 decision.",
            "Corruption",
            "critical",
            "Immunity, SCOTUS",
        )?,
        event(
            "trump-criminal-compendium",
            "May 30, 2024",
            "2024-05-30",
            "Trump Convicted on All 34 Counts",
            "First former president convicted of felonies. Guilty on all 34 counts of falsifying business records.",
            "Criminal Conduct",
            "critical",
            "Conviction, Felony",
        )?,
        event(
            "hush-money",
            "April 4, 2023",
            "2023-04-04",
            "Trump Indicted in NY (First Time)",
            "First former president indicted. 34 felony counts for falsifying business records in hush money scheme.",
            "Criminal Conduct",
            "critical",
            "Indictment, Hush Money",
        )?,
        event(
            "mar-a-lago-documents",
            "August 8, 2022",
            "2022-08-08",
            "FBI Searches Mar-a-Lago",
            "FBI recovered 300+ classified documents including TOP SECRET/SCI material. Trump had refused to return them.",
            "National Security",
            "critical",
            "Classified Documents, FBI",
        )?,
        event(
            "federalist-society",
            "June 2022",
            "2022-06-24",
            "Roe v. Wade Overturned",
            "Supreme Court eliminates constitutional right to abortion after 50 years. Federalist Society achieved decades-long goal.",
            "Civil Rights",
            "critical",
            "Abortion, SCOTUS",
        )?,
        event(
            "january-6-insurrection",
            "January 6, 2021",
            "2021-01-06",
            "January 6 Insurrection",
            "Trump incited mob to storm Capitol to stop certification. Deaths, injuries, 1,400+ charged. Seditious conspiracy convictions.",
            "Election Interference",
            "critical",
            "January 6, Insurrection",
        )?,
        event(
            "georgia-rico",
            "January 2, 2021",
            "2021-01-02",
            "Trump Pressures Raffensperger",
            "'I just want to find 11,780 votes.' Trump pressured Georgia officials to overturn election. Recorded call.",
            "Election Interference",
            "critical",
            "Georgia, Raffensperger",
        )?,
        event(
            "voter-suppression",
            "November 3, 2020",
            "2020-11-03",
            "Trump Loses Election, Launches Big Lie",
            "Biden wins by 7 million votes. Trump claims fraud, files 60+ lawsuits (all fail), pressures officials to 'find votes.'",
            "Election Interference",
            "critical",
            "Big Lie, Election",
        )?,
        event(
            "lafayette-square",
            "June 1, 2020",
            "2020-06-01",
            "Lafayette Square Cleared for Photo Op",
            "Peaceful protesters tear-gassed so Trump could hold Bible at St. John's Church. Military leaders later apologized.",
            "Abuse of Power",
            "critical",
            "Lafayette Square, Protest",
        )?,
        event(
            "police-brutality",
            "May 25, 2020",
            "2020-05-25",
            "George Floyd Murdered",
            "Minneapolis police officer Derek Chauvin murdered George Floyd. Sparked largest protests in U.S. history.",
            "Civil Rights",
            "critical",
            "George Floyd, Police",
        )?,
        event(
            "covid-response",
            "January 2020",
            "2020-01-01",
            "COVID-19: Trump Knew and Lied",
            "Trump privately told Woodward virus was 'deadly stuff' while publicly downplaying. 400,000+ preventable deaths.",
            "Public Health",
            "critical",
            "COVID, Pandemic",
        )?,
        event(
            "epstein-network",
            "August 10, 2019",
            "2019-08-10",
            "Jeffrey Epstein Dies in Custody",
            "Epstein found dead in federal jail. Guards sleeping, cameras failed, cellmate transferred. Ruled suicide.",
            "Human Trafficking",
            "critical",
            "Epstein, Death",
        )?,
        event(
            "ukraine-extortion",
            "July 25, 2019",
            "2019-07-25",
            "Trump-Zelensky Call",
            "'I would like you to do us a favor though.' Trump withheld aid to extort Ukraine into announcing Biden investigation.",
            "Abuse of Power",
            "critical",
            "Ukraine, Impeachment",
        )?,
        event(
            "family-separation",
            "April 2018",
            "2018-04-01",
            "Family Separation Policy Implemented",
            "'Zero tolerance' deliberately separated 5,500+ children from parents. Children caged. 7 died in custody.",
            "Crimes Against Humanity",
            "critical",
            "Family Separation, Immigration",
        )?,
        event(
            "puerto-rico",
            "September 20, 2017",
            "2017-09-20",
            "Hurricane Maria Hits Puerto Rico",
            "Nearly 3,000 Americans died. Trump threw paper towels, denied death toll, blocked billions in aid.",
            "Crimes Against Humanity",
            "critical",
            "Puerto Rico, Hurricane",
        )?,
        event(
            "charlottesville",
            "August 12, 2017",
            "2017-08-12",
            "Charlottesville 'Unite the Right'",
            "Neo-Nazi rally resulted in Heather Heyer's murder. Trump: 'Very fine people on both sides.'",
            "Civil Rights",
            "critical",
            "Charlottesville, White Supremacy",
        )?,
        event(
            "muslim-ban",
            "January 27, 2017",
            "2017-01-27",
            "Muslim Travel Ban Signed",
            "Trump signed discriminatory ban on Muslim-majority countries. Families separated. Courts intervened.",
            "Civil Rights",
            "high",
            "Muslim Ban, Immigration",
        )?,
        event(
            "russian-interference",
            "July 16, 2016",
            "2016-07-16",
            "Russia Begins Election Interference",
            "GRU hacked DNC. WikiLeaks released stolen emails. IRA ran disinformation. 'Sweeping and systematic' interference.",
            "Election Interference",
            "critical",
            "Russia, Election",
        )?,
        event(
            "flint-water-crisis",
            "April 25, 2014",
            "2014-04-25",
            "Flint Water Switch",
            "Flint switched to contaminated water source. 100,000 poisoned with lead. Officials covered up for 18 months.",
            "Environmental Racism",
            "critical",
            "Flint, Lead, Racism",
        )?,
        event(
            "nsa-mass-surveillance",
            "June 6, 2013",
            "2013-06-06",
            "Snowden Revelations Begin",
            "Edward Snowden exposed NSA mass surveillance. PRISM collecting data on all Americans. No officials faced consequences.",
            "Constitutional Violations",
            "critical",
            "NSA, Snowden, Surveillance",
        )?,
        event(
            "dark-money",
            "January 21, 2010",
            "2010-01-21",
            "Citizens United Decision",
            "Supreme Court declared corporations are people with speech rights. Unleashed unlimited dark money in politics.",
            "Corruption",
            "critical",
            "Citizens United, Dark Money",
        )?,
        event(
            "financial-fraud",
            "September 15, 2008",
            "2008-09-15",
            "Lehman Brothers Collapses",
            "Wall Street fraud crashed global economy. 8 million jobs lost. Taxpayers bailed out banks. No executives jailed.",
            "Financial Crimes",
            "critical",
            "Financial Crisis, Wall Street",
        )?,
        event(
            "abu-ghraib",
            "April 28, 2004",
            "2004-04-28",
            "Abu Ghraib Photos Leaked",
            "Photos reveal U.S. soldiers torturing Iraqi prisoners. Only low-level soldiers punished.",
            "War Crimes",
            "critical",
            "Torture, Abu Ghraib",
        )?,
        event(
            "iraq-war-lies",
            "March 20, 2003",
            "2003-03-20",
            "Iraq War Begins Based on Lies",
            "Bush administration lied about WMD and al-Qaeda. Hundreds of thousands killed, ISIS created. No accountability.",
            "War Crimes",
            "critical",
            "Iraq, WMD Lies",
        )?,
        event(
            "torture-program",
            "January 11, 2002",
            "2002-01-11",
            "Guantánamo Bay Opens",
            "Indefinite detention without trial begins. Torture including waterboarding, force-feeding. 780 detained, most never charged.",
            "War Crimes",
            "critical",
            "Guantánamo, Torture",
        )?,
        event(
            "surveillance-state",
            "October 26, 2001",
            "2001-10-26",
            "USA PATRIOT Act Passed",
            "Rushed through Congress after 9/11. Enabled mass surveillance, indefinite detention. Most legislators didn't read it.",
            "Constitutional Violations",
            "critical",
            "PATRIOT Act, Surveillance",
        )?,
        event(
            "bush-v-gore",
            "December 12, 2000",
            "2000-12-12",
            "Bush v. Gore - Election Stolen",
            "Supreme Court stopped Florida recount by 5-4 vote. Selected Bush as president. Later analysis showed Gore won.",
            "Election Interference",
            "critical",
            "Supreme Court, Bush, Gore",
        )?,
        event(
            "iran-contra",
            "November 3, 1986",
            "1986-11-03",
            "Iran-Contra Scandal Exposed",
            "Reagan secretly sold weapons to Iran, funded Nicaraguan death squads. Oliver North shredded evidence.",
            "Government Abuse",
            "critical",
            "Reagan, Iran-Contra",
        )?,
        event(
            "operation-condor",
            "November 25, 1975",
            "1975-11-25",
            "Operation Condor Begins",
            "CIA-backed assassination network of South American dictatorships coordinated to murder 60,000+ dissidents.",
            "War Crimes",
            "critical",
            "Condor, CIA, Assassination",
        )?,
        event(
            "chile-coup",
            "September 11, 1973",
            "1973-09-11",
            "Chile Coup - Allende Overthrown",
            "CIA helped overthrow democratically elected Salvador Allende. Pinochet dictatorship killed 3,000+, tortured 40,000+.",
            "War Crimes",
            "critical",
            "Chile, CIA, Pinochet",
        )?,
        event(
            "watergate",
            "June 17, 1972",
            "1972-06-17",
            "Watergate Break-in",
            "Nixon's operatives burglarized DNC headquarters, triggering scandal that led to his resignation.",
            "Government Abuse",
            "critical",
            "Nixon, Watergate",
        )?,
        event(
            "war-on-drugs",
            "June 17, 1971",
            "1971-06-17",
            "War on Drugs Declared",
            "Nixon aide later confessed: designed to target 'Black people and antiwar left.' $1 trillion spent, millions incarcerated.",
            "Systemic Racism",
            "critical",
            "Drug War, Mass Incarceration",
        )?,
        event(
            "vietnam-war-crimes",
            "March 16, 1968",
            "1968-03-16",
            "My Lai Massacre",
            "U.S. soldiers murdered 500+ Vietnamese civilians including women and children. Only Lt. Calley convicted, served 3.5 years house arrest.",
            "War Crimes",
            "critical",
            "Vietnam, Massacre",
        )?,
        event(
            "gulf-of-tonkin",
            "August 2, 1964",
            "1964-08-02",
            "Gulf of Tonkin Incident",
            "The lie that started Vietnam War. August 4 'attack' never happened. 58,000 Americans and 2-3 million Vietnamese died.",
            "War Crimes",
            "critical",
            "Vietnam, Lies",
        )?,
        event(
            "cointelpro",
            "1956-1971",
            "1956-08-25",
            "COINTELPRO Operations",
            "FBI's systematic destruction of civil rights movement. Targeted MLK, assassinated Fred Hampton, infiltrated Black Panthers.",
            "Government Abuse",
            "critical",
            "FBI, Civil Rights",
        )?,
        event(
            "iran-coup",
            "August 19, 1953",
            "1953-08-19",
            "Iran Coup - CIA Overthrows Mosaddegh",
            "CIA/MI6 overthrew democratically elected government over oil nationalization. Installed Shah dictatorship.",
            "War Crimes",
            "critical",
            "CIA, Coup, Iran",
        )?,
        event(
            "mkultra",
            "1953-1973",
            "1953-04-13",
            "MKUltra: CIA Mind Control Program",
            "CIA conducted illegal experiments on unwitting Americans. LSD, electroshock, mind control. Most records destroyed.",
            "Crimes Against Humanity",
            "critical",
            "CIA, Experimentation",
        )?,
        event(
            "operation-mockingbird",
            "1950s",
            "1950-01-01",
            "Operation Mockingbird Begins",
            "CIA infiltrated American journalism, influencing 400+ journalists to plant stories and suppress unfavorable coverage.",
            "Government Abuse",
            "critical",
            "CIA, Media",
        )?,
        event(
            "japanese-internment",
            "February 19, 1942",
            "1942-02-19",
            "Japanese American Internment Ordered",
            "Executive Order 9066 authorized imprisonment of 120,000 Americans without charge based solely on race.",
            "Crimes Against Humanity",
            "critical",
            "Internment, WWII",
        )?,
        event(
            "tuskegee-experiment",
            "1932-1972",
            "1932-01-01",
            "Tuskegee Syphilis Study",
            "U.S. government withheld treatment from 399 Black men for 40 years to study disease progression. 128 died, 40 wives infected.",
            "Crimes Against Humanity",
            "critical",
            "Medical Experimentation, Racism",
        )?,
        event(
            "indian-boarding-schools",
            "1879",
            "1879-11-01",
            "Indian Boarding Schools Established",
            "'Kill the Indian, save the man.' Children forcibly removed, thousands died. Federal investigation found 500+ burial sites.",
            "Crimes Against Humanity",
            "critical",
            "Boarding Schools, Genocide",
        )?,
        event(
            "native-american-genocide",
            "1492",
            "1492-01-01",
            "Native American Genocide Begins",
            "European colonization begins the systematic extermination of indigenous peoples that would reduce the population from 60-100 million to 800,000.",
            "Crimes Against Humanity",
            "critical",
            "Genocide, Native Americans",
        )?,
    ];
    RecordStore::new(timeline_schema()?, records)
}

/// Schema of the affiliations catalog used by the connections sidebar.
pub fn affiliation_schema() -> Result<Schema> {
    Ok(Schema::new(
        "affiliations",
        vec![
            FieldSpec::new(field("name")?, FieldKind::Text).searchable(),
            FieldSpec::new(field("kind")?, FieldKind::Category),
            FieldSpec::new(field("relationship")?, FieldKind::Text).searchable(),
            FieldSpec::new(field("href")?, FieldKind::Text),
        ],
    )?)
}

fn affiliation(id: &str, name: &str, kind: &str, relationship: &str, href: &str) -> Result<Record> {
    let kind: AffiliationKind = kind.parse().map_err(StoreError::Invalid)?;
    Ok(Record::new(RecordId::new(id)?)
        .with_cell(field("name")?, FieldValue::text(name))
        .with_cell(field("kind")?, FieldValue::text(kind.as_str()))
        .with_cell(field("relationship")?, FieldValue::text(relationship))
        .with_cell(field("href")?, FieldValue::text(href)))
}

/// Affiliations connected to the document library's investigations. Kinds
/// appear in relevance order; the grouped sidebar preserves it.
pub fn affiliations() -> Result<RecordStore> {
    let records = vec![
        affiliation(
            "1",
            "Food and Drug Administration",
            "agency",
            "Issued the fast-track approval memos",
            "/entities/agencies/fda",
        )?,
        affiliation(
            "2",
            "Meridian Chemical",
            "corporation",
            "Recipient of environmental protection waivers",
            "/entities/corporations/meridian-chemical",
        )?,
        affiliation(
            "3",
            "Environmental Protection Agency",
            "agency",
            "Granted the documented waivers",
            "/entities/agencies/epa",
        )?,
        affiliation(
            "4",
            "Project Nightshade",
            "document",
            "Primary investigation file",
            "/investigations/project-nightshade",
        )?,
        affiliation(
            "5",
            "Former Agency Analyst",
            "individual",
            "Source of the anonymized testimony transcript",
            "/entities/individuals/former-agency-analyst",
        )?,
        affiliation(
            "6",
            "Coalition for Trial Transparency",
            "organization",
            "Published the adverse-event analysis",
            "/entities/organizations/coalition-for-trial-transparency",
        )?,
        affiliation(
            "7",
            "Department of Defense",
            "agency",
            "Subject of the black budget allocation records",
            "/entities/agencies/dod",
        )?,
        affiliation(
            "8",
            "Silent Erosion",
            "document",
            "Investigation file for the waiver records",
            "/investigations/silent-erosion",
        )?,
    ];
    RecordStore::new(affiliation_schema()?, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_library_validates() {
        let store = document_library().unwrap();
        assert_eq!(store.len(), 8);
        assert_eq!(
            store.distinct_values(&field("category").unwrap()).unwrap(),
            vec![
                "Health",
                "Corporate",
                "Environmental",
                "Government",
                "Financial"
            ]
        );
    }

    #[test]
    fn timeline_carries_the_full_event_list() {
        let store = timeline().unwrap();
        assert_eq!(store.len(), 42);
        let severity = field("severity").unwrap();
        let high: Vec<&str> = store
            .records()
            .iter()
            .filter(|r| r.cell(&severity) == Some(&FieldValue::text("high")))
            .map(|r| r.id().as_str())
            .collect();
        assert_eq!(high, vec!["muslim-ban"]);
    }

    #[test]
    fn timeline_is_newest_first() {
        let store = timeline().unwrap();
        let sort_date = field("sort_date").unwrap();
        let dates: Vec<&FieldValue> = store
            .records()
            .iter()
            .map(|r| r.cell(&sort_date).unwrap())
            .collect();
        for pair in dates.windows(2) {
            let (FieldValue::Date(a), FieldValue::Date(b)) = (pair[0], pair[1]) else {
                panic!("timeline sort_date must be a date");
            };
            assert!(a >= b);
        }
    }

    #[test]
    fn affiliation_kinds_are_closed() {
        let store = affiliations().unwrap();
        for value in store.distinct_values(&field("kind").unwrap()).unwrap() {
            assert!(value.parse::<AffiliationKind>().is_ok());
        }
    }
}
