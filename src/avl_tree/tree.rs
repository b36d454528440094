use crate::avl_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => (**node).height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

pub fn insert<T>(tree: &mut Tree<T>, value: T, balancing: bool) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => {
            match value.cmp(&node.value) {
                Ordering::Less => insert(&mut node.left, value, balancing),
                Ordering::Greater => insert(&mut node.right, value, balancing),
                Ordering::Equal => return false,
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    if balancing {
        balance(tree);
    } else if let Some(ref mut node) = tree {
        node.update();
    }

    inserted
}

pub fn get<'a, T, V>(tree: &'a Tree<T>, value: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(node.value.borrow()) {
            Ordering::Less => get(&node.left, value),
            Ordering::Greater => get(&node.right, value),
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn ceil<'a, T, V>(tree: &'a Tree<T>, value: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(node.value.borrow()) {
            Ordering::Greater => ceil(&node.right, value),
            Ordering::Less => {
                match ceil(&node.left, value) {
                    None => Some(&node.value),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn floor<'a, T, V>(tree: &'a Tree<T>, value: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(node.value.borrow()) {
            Ordering::Less => floor(&node.left, value),
            Ordering::Greater => {
                match floor(&node.right, value) {
                    None => Some(&node.value),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        Some(&curr.value)
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        Some(&curr.value)
    })
}

pub fn preorder<T, F>(tree: &Tree<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(ref node) = tree {
        visit(&node.value);
        preorder(&node.left, visit);
        preorder(&node.right, visit);
    }
}

pub fn inorder<T, F>(tree: &Tree<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(ref node) = tree {
        inorder(&node.left, visit);
        visit(&node.value);
        inorder(&node.right, visit);
    }
}

pub fn postorder<T, F>(tree: &Tree<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(ref node) = tree {
        postorder(&node.left, visit);
        postorder(&node.right, visit);
        visit(&node.value);
    }
}
