//! Concatenate PDFs.

use lopdf::{Document, Object, ObjectId};

use super::{load, pages_root, save, PdfError};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Cycle guard for walking `Parent` links.
const MAX_TREE_DEPTH: usize = 64;

/// A page and the inherited attributes it needs once it is moved under a
/// new parent.
struct PageEntry {
    id: ObjectId,
    inherited: Vec<(&'static [u8], Object)>,
}

/// Merge two or more PDFs into one, keeping the order of `documents` and
/// of the pages within each.
///
/// The first document becomes the base. Objects of every later document
/// are renumbered past the current highest object id and copied in, then
/// all pages are hung directly off the base's page tree root.
pub fn merge_documents(documents: &[Vec<u8>]) -> Result<Vec<u8>, PdfError> {
    if documents.len() < 2 {
        return Err(PdfError::NotEnoughDocuments(documents.len()));
    }

    let mut loaded = Vec::with_capacity(documents.len());
    for (i, bytes) in documents.iter().enumerate() {
        let doc = load(bytes).map_err(|e| match e {
            PdfError::Parse(msg) => {
                PdfError::Parse(format!("Failed to load document {}: {}", i + 1, msg))
            }
            other => other,
        })?;
        loaded.push(doc);
    }

    let mut sources = loaded.into_iter();
    let Some(mut dest) = sources.next() else {
        return Err(PdfError::NotEnoughDocuments(0));
    };
    let root_id = pages_root(&dest)?;
    let mut pages = page_entries(&dest, 0);

    for source in sources {
        let offset = dest.max_id;
        pages.extend(page_entries(&source, offset));

        for ((number, generation), object) in source.objects {
            dest.objects
                .insert((number + offset, generation), remap_refs(object, offset));
        }
        dest.max_id = dest.max_id.max(source.max_id + offset);
    }

    for page in &pages {
        reparent(&mut dest, page, root_id)?;
    }
    update_page_tree(&mut dest, root_id, &pages)?;

    // Catalogs and page tree nodes of the appended documents are now
    // unreachable.
    dest.prune_objects();

    log::debug!(
        "Merged {} documents into {} pages",
        documents.len(),
        pages.len()
    );
    save(dest)
}

/// Pages of `doc` in order, with ids shifted by `offset`.
fn page_entries(doc: &Document, offset: u32) -> Vec<PageEntry> {
    doc.get_pages()
        .values()
        .map(|&id| PageEntry {
            id: (id.0 + offset, id.1),
            inherited: inherited_attributes(doc, id)
                .into_iter()
                .map(|(key, value)| (key, remap_refs(value, offset)))
                .collect(),
        })
        .collect()
}

/// Inheritable attributes the page lacks, taken from the nearest ancestor
/// that defines them.
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(&'static [u8], Object)> {
    let mut found: Vec<(&'static [u8], Object)> = Vec::new();
    let Ok(page) = doc.get_dictionary(page_id) else {
        return found;
    };

    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;
    while let Some(node_id) = parent {
        let Ok(node) = doc.get_dictionary(node_id) else {
            break;
        };
        for key in INHERITABLE {
            if page.has(key) || found.iter().any(|(k, _)| *k == key) {
                continue;
            }
            if let Ok(value) = node.get(key) {
                found.push((key, value.clone()));
            }
        }

        depth += 1;
        if depth >= MAX_TREE_DEPTH {
            break;
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }
    found
}

/// Point a page at the new root and give it the attributes it used to
/// inherit.
fn reparent(doc: &mut Document, page: &PageEntry, root_id: ObjectId) -> Result<(), PdfError> {
    let dict = doc
        .get_object_mut(page.id)
        .and_then(Object::as_dict_mut)
        .map_err(|_| PdfError::Operation(format!("Page object {:?} is missing", page.id)))?;

    for (key, value) in &page.inherited {
        if !dict.has(key) {
            dict.set(*key, value.clone());
        }
    }
    dict.set("Parent", Object::Reference(root_id));
    Ok(())
}

/// Replace the root's kids with the merged page list.
fn update_page_tree(
    doc: &mut Document,
    root_id: ObjectId,
    pages: &[PageEntry],
) -> Result<(), PdfError> {
    let root = doc
        .get_object_mut(root_id)
        .and_then(Object::as_dict_mut)
        .map_err(|_| PdfError::Operation("Invalid pages dictionary".into()))?;

    let kids = pages.iter().map(|page| Object::Reference(page.id)).collect();
    root.set("Kids", Object::Array(kids));
    root.set("Count", Object::Integer(pages.len() as i64));
    root.remove(b"Parent");
    Ok(())
}

/// Shift every indirect reference inside `object` by `offset`.
fn remap_refs(object: Object, offset: u32) -> Object {
    match object {
        Object::Reference((number, generation)) => Object::Reference((number + offset, generation)),
        Object::Array(items) => Object::Array(
            items
                .into_iter()
                .map(|item| remap_refs(item, offset))
                .collect(),
        ),
        Object::Dictionary(mut dict) => {
            for (_, value) in dict.iter_mut() {
                *value = remap_refs(std::mem::replace(value, Object::Null), offset);
            }
            Object::Dictionary(dict)
        }
        Object::Stream(mut stream) => {
            for (_, value) in stream.dict.iter_mut() {
                *value = remap_refs(std::mem::replace(value, Object::Null), offset);
            }
            Object::Stream(stream)
        }
        other => other,
    }
}
