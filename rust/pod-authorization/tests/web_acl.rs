use std::{collections::BTreeSet, sync::Arc};

use anyhow::Result;
use pod_authorization::{
    AccessMap, AccessMode, AuthorizationError, AuthorizationErrorKind, CredentialGroup,
    Credentials, Permission, PermissionResolver, WebAclResolver,
};
use pod_rdf::vocabulary::{acl, foaf, rdf, vcard};
use pod_storage::{
    FailingStatementReader, MeasuredStatementReader, MemoryStatementStore, ResourceIdentifier,
    SingleRootIdentifierStrategy, StatementReader, SuffixAuxiliaryStrategy,
};
use pretty_assertions::assert_eq;

const ROOT: &str = "https://pod.example/";
const ALICE: &str = "https://alice.example/profile#me";
const BOB: &str = "https://bob.example/profile#me";

fn resolver(reader: impl StatementReader + 'static) -> Result<WebAclResolver> {
    Ok(WebAclResolver::new(
        Arc::new(SingleRootIdentifierStrategy::new(ROOT)?),
        Arc::new(SuffixAuxiliaryStrategy::new(".acl")),
        Arc::new(reader),
    ))
}

/// An `acl:Authorization` rule in N-Triples, one line per clause
fn rule(id: &str, clauses: &[(&str, &str)]) -> String {
    let mut document = format!("<{id}> <{}> <{}> .\n", rdf::TYPE, acl::AUTHORIZATION);
    for (predicate, object) in clauses {
        document.push_str(&format!("<{id}> <{predicate}> <{object}> .\n"));
    }
    document
}

fn request(targets: &[&str]) -> AccessMap {
    targets
        .iter()
        .map(|target| (ResourceIdentifier::from(*target), BTreeSet::from([AccessMode::Read])))
        .collect()
}

fn id(path: &str) -> ResourceIdentifier {
    ResourceIdentifier::from(path)
}

#[tokio::test]
async fn it_inherits_default_rules_from_the_root() -> Result<()> {
    let store = MemoryStatementStore::default();
    store
        .set(
            "https://pod.example/.acl",
            rule(
                "https://pod.example/.acl#public",
                &[
                    (acl::DEFAULT, ROOT),
                    (acl::AGENT_CLASS, foaf::AGENT),
                    (acl::MODE, acl::READ),
                ],
            ),
        )
        .await;

    let permissions = resolver(store)?
        .resolve(
            &Credentials::public(),
            &request(&["https://pod.example/foo/bar", "https://pod.example/.acl"]),
        )
        .await?;

    let descendant = &permissions[&id("https://pod.example/foo/bar")];
    assert!(descendant.allows(AccessMode::Read));
    assert!(!descendant.allows(AccessMode::Write));

    // The document itself is only reachable through control on the root
    assert!(permissions[&id("https://pod.example/.acl")].effective().is_empty());

    Ok(())
}

#[tokio::test]
async fn it_limits_authenticated_agent_rules_to_authenticated_requests() -> Result<()> {
    let store = MemoryStatementStore::default();
    store
        .set(
            "https://pod.example/.acl",
            rule(
                "https://pod.example/.acl#members",
                &[
                    (acl::ACCESS_TO, ROOT),
                    (acl::AGENT_CLASS, acl::AUTHENTICATED_AGENT),
                    (acl::MODE, acl::READ),
                ],
            ),
        )
        .await;
    let resolver = resolver(store)?;
    let root = id(ROOT);

    let anonymous = resolver.resolve(&Credentials::public(), &request(&[ROOT])).await?;
    assert!(!anonymous[&root].allows(AccessMode::Read));
    assert_eq!(anonymous[&root].get(CredentialGroup::Agent), None);

    let alice = resolver.resolve(&Credentials::agent(ALICE), &request(&[ROOT])).await?;
    assert_eq!(
        alice[&root].get(CredentialGroup::Public),
        Some(&Permission::default())
    );
    assert_eq!(
        alice[&root].get(CredentialGroup::Agent),
        Some(&Permission::from_modes(&[AccessMode::Read]))
    );

    Ok(())
}

#[tokio::test]
async fn it_implies_append_from_write() -> Result<()> {
    let store = MemoryStatementStore::default();
    store
        .set(
            "https://pod.example/.acl",
            rule(
                "https://pod.example/.acl#alice",
                &[
                    (acl::ACCESS_TO, ROOT),
                    (acl::AGENT, ALICE),
                    (acl::MODE, acl::WRITE),
                ],
            ),
        )
        .await;

    let permissions = resolver(store)?
        .resolve(&Credentials::agent(ALICE), &request(&[ROOT]))
        .await?;

    assert_eq!(
        permissions[&id(ROOT)].effective(),
        Permission {
            read: false,
            append: true,
            write: true,
            control: false,
        }
    );

    Ok(())
}

#[tokio::test]
async fn it_scopes_access_to_and_default_rules() -> Result<()> {
    let store = MemoryStatementStore::default();
    let mut document = rule(
        "https://pod.example/.acl#own",
        &[
            (acl::ACCESS_TO, ROOT),
            (acl::AGENT_CLASS, foaf::AGENT),
            (acl::MODE, acl::READ),
        ],
    );
    document.push_str(&rule(
        "https://pod.example/.acl#inherited",
        &[
            (acl::DEFAULT, ROOT),
            (acl::AGENT_CLASS, foaf::AGENT),
            (acl::MODE, acl::APPEND),
        ],
    ));
    store.set("https://pod.example/.acl", document).await;

    let permissions = resolver(store)?
        .resolve(
            &Credentials::public(),
            &request(&[ROOT, "https://pod.example/inbox/"]),
        )
        .await?;

    assert_eq!(
        permissions[&id(ROOT)].effective(),
        Permission::from_modes(&[AccessMode::Read])
    );
    assert_eq!(
        permissions[&id("https://pod.example/inbox/")].effective(),
        Permission::from_modes(&[AccessMode::Append])
    );

    Ok(())
}

#[tokio::test]
async fn it_prefers_the_nearest_document() -> Result<()> {
    let store = MemoryStatementStore::default();
    store
        .set(
            "https://pod.example/.acl",
            rule(
                "https://pod.example/.acl#public",
                &[
                    (acl::DEFAULT, ROOT),
                    (acl::AGENT_CLASS, foaf::AGENT),
                    (acl::MODE, acl::READ),
                ],
            ),
        )
        .await;
    // The private container's document grants nothing to the public
    store
        .set(
            "https://pod.example/private/.acl",
            rule(
                "https://pod.example/private/.acl#alice",
                &[
                    (acl::DEFAULT, "https://pod.example/private/"),
                    (acl::AGENT, ALICE),
                    (acl::MODE, acl::READ),
                ],
            ),
        )
        .await;
    let resolver = resolver(store)?;
    let target = id("https://pod.example/private/diary");

    let anonymous = resolver
        .resolve(&Credentials::public(), &request(&[target.path()]))
        .await?;
    assert!(!anonymous[&target].allows(AccessMode::Read));

    let alice = resolver
        .resolve(&Credentials::agent(ALICE), &request(&[target.path()]))
        .await?;
    assert!(alice[&target].allows(AccessMode::Read));

    Ok(())
}

#[tokio::test]
async fn it_grants_everything_on_a_document_to_its_controllers() -> Result<()> {
    let store = MemoryStatementStore::default();
    store
        .set(
            "https://pod.example/.acl",
            rule(
                "https://pod.example/.acl#owner",
                &[
                    (acl::ACCESS_TO, ROOT),
                    (acl::AGENT, ALICE),
                    (acl::MODE, acl::CONTROL),
                ],
            ),
        )
        .await;
    let resolver = resolver(store)?;
    let document = id("https://pod.example/.acl");

    let alice = resolver
        .resolve(&Credentials::agent(ALICE), &request(&[document.path()]))
        .await?;
    assert_eq!(alice[&document].effective(), Permission::all());

    let bob = resolver
        .resolve(&Credentials::agent(BOB), &request(&[document.path()]))
        .await?;
    assert!(bob[&document].effective().is_empty());

    Ok(())
}

#[tokio::test]
async fn it_grants_rules_to_agent_group_members() -> Result<()> {
    let store = MemoryStatementStore::default();
    store
        .set(
            "https://pod.example/.acl",
            rule(
                "https://pod.example/.acl#friends",
                &[
                    (acl::DEFAULT, ROOT),
                    (acl::AGENT_GROUP, "https://pod.example/groups#friends"),
                    (acl::MODE, acl::READ),
                ],
            ),
        )
        .await;
    store
        .set(
            "https://pod.example/groups",
            format!("<https://pod.example/groups#friends> <{}> <{ALICE}> .", vcard::HAS_MEMBER),
        )
        .await;
    let resolver = resolver(store)?;
    let target = id("https://pod.example/photos/");

    let alice = resolver
        .resolve(&Credentials::agent(ALICE), &request(&[target.path()]))
        .await?;
    let bob = resolver
        .resolve(&Credentials::agent(BOB), &request(&[target.path()]))
        .await?;

    assert!(alice[&target].allows(AccessMode::Read));
    assert!(!bob[&target].allows(AccessMode::Read));

    Ok(())
}

#[tokio::test]
async fn it_reads_a_shared_document_once() -> Result<()> {
    let store = MemoryStatementStore::default();
    store
        .set(
            "https://pod.example/.acl",
            rule(
                "https://pod.example/.acl#public",
                &[
                    (acl::DEFAULT, ROOT),
                    (acl::AGENT_CLASS, foaf::AGENT),
                    (acl::MODE, acl::READ),
                ],
            ),
        )
        .await;
    let reader = MeasuredStatementReader::new(store);

    let permissions = resolver(reader.clone())?
        .resolve(
            &Credentials::public(),
            &request(&[
                "https://pod.example/a/x",
                "https://pod.example/a/y",
                "https://pod.example/b",
            ]),
        )
        .await?;

    assert_eq!(permissions.len(), 3);
    assert!(permissions.values().all(|set| set.allows(AccessMode::Read)));
    assert_eq!(reader.reads_of(&id("https://pod.example/.acl")), 1);
    assert_eq!(reader.reads(), 1);
    // a/x.acl, a/.acl, .acl, then a/y.acl and b.acl stop at known ancestors
    assert_eq!(reader.probes(), 5);

    Ok(())
}

#[tokio::test]
async fn it_fails_without_a_root_document() -> Result<()> {
    let error = resolver(MemoryStatementStore::default())?
        .resolve(&Credentials::public(), &request(&["https://pod.example/foo"]))
        .await
        .unwrap_err();

    assert_eq!(error, AuthorizationError::MissingRootPolicy(id(ROOT)));

    Ok(())
}

#[tokio::test]
async fn it_fails_when_an_existence_check_fails() -> Result<()> {
    let store = MemoryStatementStore::default();
    store
        .set(
            "https://pod.example/.acl",
            rule(
                "https://pod.example/.acl#public",
                &[
                    (acl::DEFAULT, ROOT),
                    (acl::AGENT_CLASS, foaf::AGENT),
                    (acl::MODE, acl::READ),
                ],
            ),
        )
        .await;
    let reader = FailingStatementReader::new(store).fail("https://pod.example/foo/.acl");

    let error = resolver(reader)?
        .resolve(
            &Credentials::public(),
            &request(&["https://pod.example/bar", "https://pod.example/foo/bar"]),
        )
        .await
        .unwrap_err();

    assert_eq!(error.kind(), AuthorizationErrorKind::BackendFailure);

    Ok(())
}

#[tokio::test]
async fn it_fails_on_malformed_documents() -> Result<()> {
    let store = MemoryStatementStore::default();
    store.set("https://pod.example/.acl", "this is not n-triples").await;

    let error = resolver(store)?
        .resolve(&Credentials::public(), &request(&[ROOT]))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), AuthorizationErrorKind::MalformedDocument);

    Ok(())
}

#[tokio::test]
async fn it_grants_nothing_from_an_empty_document() -> Result<()> {
    let store = MemoryStatementStore::default();
    store.set("https://pod.example/.acl", "").await;

    let permissions = resolver(store)?
        .resolve(
            &Credentials::agent(ALICE),
            &request(&[ROOT, "https://pod.example/foo"]),
        )
        .await?;

    for set in permissions.values() {
        assert!(set.effective().is_empty());
    }
    assert_eq!(permissions.len(), 2);

    Ok(())
}

#[tokio::test]
async fn it_reads_a_shared_group_document_once() -> Result<()> {
    let store = MemoryStatementStore::default();
    let mut document = rule(
        "https://pod.example/.acl#friends-own",
        &[
            (acl::ACCESS_TO, ROOT),
            (acl::AGENT_GROUP, "https://pod.example/groups#friends"),
            (acl::MODE, acl::READ),
        ],
    );
    document.push_str(&rule(
        "https://pod.example/.acl#friends-inherited",
        &[
            (acl::DEFAULT, ROOT),
            (acl::AGENT_GROUP, "https://pod.example/groups#friends"),
            (acl::MODE, acl::READ),
        ],
    ));
    store.set("https://pod.example/.acl", document).await;
    store
        .set(
            "https://pod.example/groups",
            format!("<https://pod.example/groups#friends> <{}> <{ALICE}> .", vcard::HAS_MEMBER),
        )
        .await;
    let reader = MeasuredStatementReader::new(store);

    let permissions = resolver(reader.clone())?
        .resolve(
            &Credentials::agent(ALICE),
            &request(&[ROOT, "https://pod.example/photos/"]),
        )
        .await?;

    assert!(permissions.values().all(|set| set.allows(AccessMode::Read)));
    assert_eq!(reader.reads_of(&id("https://pod.example/groups")), 1);

    Ok(())
}

#[tokio::test]
async fn it_reports_targets_outside_the_hierarchy() -> Result<()> {
    let error = resolver(MemoryStatementStore::default())?
        .resolve(&Credentials::public(), &request(&["https://elsewhere.example/file"]))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), AuthorizationErrorKind::Hierarchy);

    Ok(())
}
