mod hash_object;
mod ls_tree;
